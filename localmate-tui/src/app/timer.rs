use time::OffsetDateTime;

/// The three fields of a running countdown. Wrapping them in one struct keeps
/// the invariant that they are all set or all absent; partial states are
/// unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningTimer {
    pub task_id: i64,
    pub task_title: String,
    pub duration_minutes: u32,
    /// Wall-clock end time. Remaining time is always recomputed from this,
    /// so the countdown stays accurate across system sleep.
    pub end_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartError {
    NoTaskSelected,
    InvalidDuration,
    AlreadyRunning,
}

/// Single-instance countdown timer: Idle when `run` is None, Running
/// otherwise. At most one run exists at any time.
#[derive(Debug, Default)]
pub struct CountdownTimer {
    run: Option<RunningTimer>,
}

impl CountdownTimer {
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn current(&self) -> Option<&RunningTimer> {
        self.run.as_ref()
    }

    /// Idle → Running. Validation failures leave the state untouched; a
    /// second start while Running is rejected and cannot reschedule the run.
    pub fn start(
        &mut self,
        task: Option<(i64, String)>,
        duration_minutes: Option<u32>,
        now: OffsetDateTime,
    ) -> Result<&RunningTimer, StartError> {
        if self.run.is_some() {
            return Err(StartError::AlreadyRunning);
        }
        let (task_id, task_title) = task.ok_or(StartError::NoTaskSelected)?;
        let duration_minutes = match duration_minutes {
            Some(d) if d >= 1 => d,
            _ => return Err(StartError::InvalidDuration),
        };

        Ok(self.run.insert(RunningTimer {
            task_id,
            task_title,
            duration_minutes,
            end_at: now + time::Duration::minutes(duration_minutes as i64),
        }))
    }

    /// Running → Idle without any backend effect. Stopping while Idle is a
    /// no-op. Returns the cancelled run, if there was one.
    pub fn stop(&mut self) -> Option<RunningTimer> {
        self.run.take()
    }

    /// Re-adopt a persisted run (bootstrap restore). Only valid while Idle.
    pub fn restore(&mut self, run: RunningTimer) {
        if self.run.is_none() {
            self.run = Some(run);
        }
    }

    /// Seconds left on the countdown, clamped at zero. Zero while Idle.
    pub fn remaining_seconds(&self, now: OffsetDateTime) -> u64 {
        match &self.run {
            Some(run) => (run.end_at - now).whole_seconds().max(0) as u64,
            None => 0,
        }
    }

    /// Running → Idle on expiry. Hands the finished run to the caller exactly
    /// once; subsequent calls return None until a new run is started.
    pub fn take_if_expired(&mut self, now: OffsetDateTime) -> Option<RunningTimer> {
        if self.run.is_some() && self.remaining_seconds(now) == 0 {
            self.run.take()
        } else {
            None
        }
    }
}

/// Format remaining seconds as zero-padded `MM:SS`.
pub fn format_remaining(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn t0() -> OffsetDateTime {
        datetime!(2024-06-01 10:00:00 UTC)
    }

    fn started(duration: u32) -> CountdownTimer {
        let mut timer = CountdownTimer::default();
        timer
            .start(Some((7, "Read chapter 4".to_string())), Some(duration), t0())
            .unwrap();
        timer
    }

    #[test]
    fn one_minute_run_counts_down_and_expires_once() {
        let mut timer = started(1);
        assert_eq!(timer.remaining_seconds(t0()), 60);
        assert_eq!(
            timer.remaining_seconds(t0() + time::Duration::seconds(25)),
            35
        );

        let expiry = t0() + time::Duration::seconds(60);
        assert!(timer.take_if_expired(expiry - time::Duration::seconds(1)).is_none());

        let run = timer.take_if_expired(expiry).expect("run should expire");
        assert_eq!(run.task_id, 7);
        assert_eq!(run.duration_minutes, 1);

        // Second check must not produce a second completion.
        assert!(timer.take_if_expired(expiry).is_none());
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(expiry), 0);
    }

    #[test]
    fn manual_stop_discards_the_run() {
        let mut timer = started(5);
        let stop_at = t0() + time::Duration::seconds(10);
        let cancelled = timer.stop().expect("run was active");
        assert_eq!(cancelled.duration_minutes, 5);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(stop_at), 0);
        // Nothing left to expire afterwards.
        assert!(timer.take_if_expired(t0() + time::Duration::minutes(5)).is_none());
    }

    #[test]
    fn stop_while_idle_is_a_noop() {
        let mut timer = CountdownTimer::default();
        assert!(timer.stop().is_none());
        assert!(!timer.is_running());
    }

    #[test]
    fn start_without_task_is_rejected_and_stays_idle() {
        let mut timer = CountdownTimer::default();
        let err = timer.start(None, Some(25), t0()).unwrap_err();
        assert_eq!(err, StartError::NoTaskSelected);
        assert!(!timer.is_running());
    }

    #[test]
    fn start_with_zero_duration_is_rejected() {
        let mut timer = CountdownTimer::default();
        let err = timer
            .start(Some((7, "x".to_string())), Some(0), t0())
            .unwrap_err();
        assert_eq!(err, StartError::InvalidDuration);
        assert!(!timer.is_running());

        let err = timer.start(Some((7, "x".to_string())), None, t0()).unwrap_err();
        assert_eq!(err, StartError::InvalidDuration);
    }

    #[test]
    fn start_while_running_cannot_reschedule() {
        let mut timer = started(5);
        let end_before = timer.current().unwrap().end_at;
        let err = timer
            .start(Some((9, "Other".to_string())), Some(1), t0())
            .unwrap_err();
        assert_eq!(err, StartError::AlreadyRunning);
        assert_eq!(timer.current().unwrap().end_at, end_before);
        assert_eq!(timer.current().unwrap().task_id, 7);
    }

    #[test]
    fn remaining_clamps_at_zero_past_the_end() {
        let timer = started(1);
        assert_eq!(
            timer.remaining_seconds(t0() + time::Duration::minutes(3)),
            0
        );
    }

    #[test]
    fn formats_zero_padded_minutes_and_seconds() {
        assert_eq!(format_remaining(60), "01:00");
        assert_eq!(format_remaining(0), "00:00");
        assert_eq!(format_remaining(5), "00:05");
        assert_eq!(format_remaining(25 * 60), "25:00");
        assert_eq!(format_remaining(61 * 60 + 9), "61:09");
    }
}
