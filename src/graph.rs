//! Index-level graph algorithms.
//!
//! Courses are addressed by their registration index. `prerequisites[i]` holds
//! the indices that must precede course `i`, in insertion order, duplicates
//! included.

use std::collections::VecDeque;

/// Result of Kahn's algorithm over an index graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KahnResult {
    /// Courses in the order they were dequeued
    pub placed: Vec<usize>,
    /// Courses whose in-degree never reached zero, ascending
    pub unresolved: Vec<usize>,
}

impl KahnResult {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Invert the prerequisite lists into dependent lists.
///
/// Dependents of each course come out in registration order, with a dependent
/// repeated once per time it lists the course.
pub fn dependents_of(prerequisites: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut dependents = vec![Vec::new(); prerequisites.len()];
    for (course, prereqs) in prerequisites.iter().enumerate() {
        for &prereq in prereqs {
            dependents[prereq].push(course);
        }
    }
    dependents
}

/// Kahn's algorithm with a FIFO queue seeded in registration order
pub fn topological_sort(prerequisites: &[Vec<usize>]) -> KahnResult {
    let n = prerequisites.len();
    let dependents = dependents_of(prerequisites);
    let mut in_degree: Vec<usize> = prerequisites.iter().map(Vec::len).collect();

    let mut queue: VecDeque<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
    let mut placed = Vec::with_capacity(n);

    while let Some(course) = queue.pop_front() {
        placed.push(course);

        for &dependent in &dependents[course] {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                queue.push_back(dependent);
            }
        }
    }

    let unresolved = (0..n).filter(|&i| in_degree[i] > 0).collect();

    KahnResult { placed, unresolved }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Find one cycle, returned as `[a, b, ..., a]` where each course must
/// precede the next. Starts are tried in registration order.
///
/// Iterative DFS; the stack holds `(course, next dependent to visit)`.
pub fn find_cycle(prerequisites: &[Vec<usize>]) -> Option<Vec<usize>> {
    let dependents = dependents_of(prerequisites);
    let mut marks = vec![Mark::Unvisited; prerequisites.len()];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for start in 0..prerequisites.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        marks[start] = Mark::OnPath;
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let (current, cursor) = *frame;
            let Some(&next) = dependents[current].get(cursor) else {
                marks[current] = Mark::Done;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match marks[next] {
                Mark::OnPath => {
                    let pos = stack.iter().position(|&(c, _)| c == next)?;
                    let mut cycle: Vec<usize> = stack[pos..].iter().map(|&(c, _)| c).collect();
                    cycle.push(next);
                    return Some(cycle);
                }
                Mark::Unvisited => {
                    marks[next] = Mark::OnPath;
                    stack.push((next, 0));
                }
                Mark::Done => {}
            }
        }
    }

    None
}
