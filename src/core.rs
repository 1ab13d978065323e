use crate::config::PlanSpec;
use crate::error::{PlanError, Result};
use crate::graph;
use crate::models::Order;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, warn};

/// Courses and their prerequisites, kept in insertion order.
///
/// Each course maps to the ordered list of courses that must directly precede
/// it. Registration order and prerequisite order are both significant: they
/// decide ties when several courses could come next.
#[derive(Debug, Clone)]
pub struct CoursePlan<T = String> {
    courses: Vec<T>,
    index: HashMap<T, usize>,
    prerequisites: Vec<Vec<usize>>,
}

impl<T> Default for CoursePlan<T> {
    fn default() -> Self {
        Self {
            courses: Vec::new(),
            index: HashMap::new(),
            prerequisites: Vec::new(),
        }
    }
}

impl<T> CoursePlan<T>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a course with no prerequisites.
    ///
    /// Returns `false` if it was already registered, in which case nothing
    /// changes.
    pub fn register_item(&mut self, course: impl Into<T>) -> bool {
        let course = course.into();
        if self.index.contains_key(&course) {
            return false;
        }

        debug!(course = %course, position = self.courses.len(), "registered course");
        self.index.insert(course.clone(), self.courses.len());
        self.courses.push(course);
        self.prerequisites.push(Vec::new());
        true
    }

    /// Require `before` to come before `after`.
    ///
    /// Both courses must already be registered. A course may name itself; that
    /// is accepted here and reported as a cycle by [`CoursePlan::compute_order`].
    pub fn add_constraint<Q>(&mut self, before: &Q, after: &Q) -> Result<()>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let before_idx = self.position(before)?;
        let after_idx = self.position(after)?;

        debug!(before = %before, after = %after, "added requisite");
        self.prerequisites[after_idx].push(before_idx);
        Ok(())
    }

    /// Compute the deterministic course order.
    ///
    /// Courses without prerequisites start in registration order; after that a
    /// course is placed in the order it became eligible.
    pub fn compute_order(&self) -> Order<T> {
        let result = graph::topological_sort(&self.prerequisites);

        if result.is_complete() {
            debug!(courses = result.placed.len(), "computed course order");
            Order::Sequence(self.resolve(&result.placed))
        } else {
            warn!(
                placed = result.placed.len(),
                unresolved = result.unresolved.len(),
                "prerequisites form a cycle"
            );
            Order::CycleDetected {
                unresolved: self.resolve(&result.unresolved),
            }
        }
    }

    /// One cycle as `[a, b, ..., a]`, each course required before the next
    pub fn find_cycle(&self) -> Option<Vec<T>> {
        graph::find_cycle(&self.prerequisites).map(|cycle| self.resolve(&cycle))
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn contains<Q>(&self, course: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(course)
    }

    /// Registered courses in registration order
    pub fn courses(&self) -> &[T] {
        &self.courses
    }

    /// Direct prerequisites of a course, in the order they were added
    pub fn prerequisites<Q>(&self, course: &Q) -> Option<Vec<&T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.index.get(course)?;
        Some(self.prerequisites[idx].iter().map(|&i| &self.courses[i]).collect())
    }

    /// Courses that list this one as a prerequisite, in registration order
    pub fn dependents<Q>(&self, course: &Q) -> Option<Vec<&T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.index.get(course)?;
        Some(
            self.prerequisites
                .iter()
                .enumerate()
                .filter(|(_, prereqs)| prereqs.contains(&idx))
                .map(|(i, _)| &self.courses[i])
                .collect(),
        )
    }

    pub fn constraint_count(&self) -> usize {
        self.prerequisites.iter().map(Vec::len).sum()
    }

    fn position<Q>(&self, course: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.index
            .get(course)
            .copied()
            .ok_or_else(|| PlanError::UnknownItem(course.to_string()))
    }

    fn resolve(&self, indices: &[usize]) -> Vec<T> {
        indices.iter().map(|&i| self.courses[i].clone()).collect()
    }
}

impl CoursePlan<String> {
    /// Build a plan from a plan file's courses and requisites
    pub fn from_spec(spec: &PlanSpec) -> Result<Self> {
        let mut plan = Self::new();
        plan.apply_spec(spec)?;
        Ok(plan)
    }

    /// Register the spec's courses, then add its requisites in order.
    ///
    /// Requisites never register courses implicitly. Every name is checked
    /// against the existing and incoming courses first, so on error the plan
    /// is left unchanged.
    pub fn apply_spec(&mut self, spec: &PlanSpec) -> Result<()> {
        let courses: Vec<&str> = spec.courses.iter().map(|c| c.trim()).collect();
        if courses.iter().any(|c| c.is_empty()) {
            return Err(PlanError::EmptyCourseName);
        }

        let incoming: HashSet<&str> = courses.iter().copied().collect();
        for req in &spec.requisites {
            for name in [req.before.trim(), req.after.trim()] {
                if !self.contains(name) && !incoming.contains(name) {
                    return Err(PlanError::UnknownItem(name.to_string()));
                }
            }
        }

        for course in courses {
            self.register_item(course);
        }
        for req in &spec.requisites {
            self.add_constraint(req.before.trim(), req.after.trim())?;
        }

        Ok(())
    }
}
