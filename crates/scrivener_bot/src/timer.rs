//! Daily timer loop.
//!
//! Jobs run inside the loop one after another; a long job delays the next
//! poll instead of overlapping with other jobs.

use crate::{BotSettings, Schedule, ScheduleType};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use scrivener_error::ConfigError;
use std::future::Future;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Interval between checks for due jobs.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// The jobs the bot can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum JobKind {
    /// Create one post
    #[display("post")]
    Post,
    /// Reply to trending posts
    #[display("comment")]
    Comment,
}

/// Executes a scheduled job to completion.
#[async_trait]
pub trait JobRunner: Send + Sync {
    /// Run `job`. Failures are handled inside the job.
    async fn run_job(&self, job: JobKind);
}

#[derive(Debug)]
struct ScheduledJob<Tz: TimeZone> {
    job: JobKind,
    schedule: ScheduleType,
    next_run: Option<DateTime<Tz>>,
}

type Clock<Tz> = Box<dyn Fn() -> DateTime<Tz> + Send + Sync>;

/// In-memory job table polled at a fixed interval.
pub struct TimerLoop<Tz: TimeZone> {
    jobs: Vec<ScheduledJob<Tz>>,
    clock: Clock<Tz>,
    poll_interval: Duration,
}

impl TimerLoop<Local> {
    /// Loop on the local wall clock.
    pub fn local() -> Self {
        Self::with_clock(Local::now)
    }

    /// Loop on the local wall clock with the post and comment jobs registered.
    ///
    /// # Errors
    ///
    /// Returns error if a configured schedule does not parse.
    pub fn from_settings(settings: &BotSettings) -> Result<Self, ConfigError> {
        let mut timer = Self::local();
        timer
            .register(JobKind::Post, settings.schedule().post_schedule()?)
            .register(JobKind::Comment, settings.schedule().comment_schedule()?);
        Ok(timer)
    }
}

impl<Tz: TimeZone> TimerLoop<Tz> {
    /// Loop that reads "now" from `clock`.
    pub fn with_clock<F>(clock: F) -> Self
    where
        F: Fn() -> DateTime<Tz> + Send + Sync + 'static,
    {
        Self {
            jobs: Vec::new(),
            clock: Box::new(clock),
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Set the polling interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Add `job`; its first run is the schedule's next occurrence after now.
    pub fn register(&mut self, job: JobKind, schedule: ScheduleType) -> &mut Self {
        let next_run = schedule.next_execution(&(self.clock)());
        match &next_run {
            Some(at) => info!(%job, %schedule, next_run = ?at, "Registered job"),
            None => warn!(%job, %schedule, "Registered job has no upcoming run"),
        }
        self.jobs.push(ScheduledJob {
            job,
            schedule,
            next_run,
        });
        self
    }

    /// Next run time of `job`, if registered and not exhausted.
    pub fn next_run(&self, job: JobKind) -> Option<&DateTime<Tz>> {
        self.jobs
            .iter()
            .find(|entry| entry.job == job)
            .and_then(|entry| entry.next_run.as_ref())
    }

    /// Run every job that is due, in registration order.
    ///
    /// After each run the job's next run is computed from the time it
    /// finished, so missed occurrences collapse into a single run.
    /// Returns how many jobs ran.
    pub async fn run_pending<R: JobRunner + ?Sized>(&mut self, runner: &R) -> usize {
        let now = (self.clock)();
        let due: Vec<usize> = self
            .jobs
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.next_run.as_ref().is_some_and(|at| *at <= now))
            .map(|(index, _)| index)
            .collect();

        for &index in &due {
            let job = self.jobs[index].job;
            info!(%job, "Running scheduled job");
            runner.run_job(job).await;

            let finished = (self.clock)();
            let entry = &mut self.jobs[index];
            entry.next_run = entry.schedule.next_execution(&finished);
            info!(%job, next_run = ?entry.next_run, "Job finished");
        }

        due.len()
    }

    /// Poll for due jobs until `shutdown` resolves.
    ///
    /// Shutdown is observed between polls, never in the middle of a job.
    #[instrument(skip_all, fields(jobs = self.jobs.len()))]
    pub async fn run_until<R, S>(&mut self, runner: &R, shutdown: S)
    where
        R: JobRunner + ?Sized,
        S: Future<Output = ()>,
    {
        info!("Timer loop started");
        tokio::pin!(shutdown);

        loop {
            self.run_pending(runner).await;

            tokio::select! {
                _ = &mut shutdown => {
                    info!("Timer loop stopping");
                    return;
                }
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }
    }
}
