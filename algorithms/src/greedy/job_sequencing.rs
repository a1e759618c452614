//! Job sequencing with deadlines.
//!
//! Variables:
//!   d_i, p_i  = deadline and profit of job i
//!   slot[t]   = job run in unit slot t, t in 1..=max d
//!
//! Equations:
//!   sort jobs by p_i descending (stable)
//!   place job i in the latest free t <= d_i, drop it if none

use crate::error::{AlgoError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub deadline: usize,
    pub profit: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobSchedule {
    /// `slots[t - 1]` holds the index of the job run in slot `t`.
    pub slots: Vec<Option<usize>>,
    pub profit: i64,
}

impl JobSchedule {
    pub fn scheduled(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().flatten().copied()
    }
}

pub fn job_sequencing(jobs: &[Job]) -> Result<JobSchedule> {
    let horizon = jobs.iter().map(|j| j.deadline).max().unwrap_or(0);
    let mut order: Vec<usize> = (0..jobs.len()).collect();
    order.sort_by(|&a, &b| jobs[b].profit.cmp(&jobs[a].profit));

    let mut slots: Vec<Option<usize>> = vec![None; horizon];
    let mut profit = 0i64;
    for i in order {
        let deadline = jobs[i].deadline;
        if let Some(t) = (0..deadline).rev().find(|&t| slots[t].is_none()) {
            slots[t] = Some(i);
            profit = profit
                .checked_add(jobs[i].profit)
                .ok_or(AlgoError::Overflow("job sequencing profit"))?;
        }
    }
    Ok(JobSchedule { slots, profit })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs(deadlines: &[usize], profits: &[i64]) -> Vec<Job> {
        deadlines
            .iter()
            .zip(profits)
            .map(|(&deadline, &profit)| Job { deadline, profit })
            .collect()
    }

    #[test]
    fn classic_five_jobs() {
        let schedule = job_sequencing(&jobs(&[2, 1, 2, 1, 3], &[100, 19, 27, 25, 15])).unwrap();
        assert_eq!(schedule.profit, 142);
        assert_eq!(schedule.slots, vec![Some(2), Some(0), Some(4)]);
    }

    #[test]
    fn zero_deadline_never_runs() {
        let schedule = job_sequencing(&jobs(&[0, 1], &[50, 10])).unwrap();
        assert_eq!(schedule.profit, 10);
        assert_eq!(schedule.scheduled().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn empty_job_list() {
        let schedule = job_sequencing(&[]).unwrap();
        assert_eq!(schedule.profit, 0);
        assert!(schedule.slots.is_empty());
    }

    #[test]
    fn equal_profits_keep_input_order() {
        let schedule = job_sequencing(&jobs(&[1, 1, 1], &[20, 20, 20])).unwrap();
        assert_eq!(schedule.slots, vec![Some(0)]);
        assert_eq!(schedule.profit, 20);
    }

    #[test]
    fn overflowing_profit_is_an_error() {
        assert_eq!(
            job_sequencing(&jobs(&[1, 2], &[i64::MAX, i64::MAX])),
            Err(AlgoError::Overflow("job sequencing profit"))
        );
    }
}
