/// Transient "Copied!" acknowledgment.
///
/// The acknowledgment is keyed by the exact text copied and stays visible for
/// [`ACK_DURATION`] after the copy that set it. A newer copy replaces both the
/// text and the deadline, so an older copy can never clear a newer one.
/// Expiry is evaluated against the caller's clock.
use std::time::{Duration, Instant};

pub const ACK_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Default)]
pub struct CopyAck {
    current: Option<Acknowledged>,
}

#[derive(Debug, Clone)]
struct Acknowledged {
    text: String,
    expires_at: Instant,
}

impl CopyAck {
    pub fn record(&mut self, text: impl Into<String>, now: Instant) {
        self.current = Some(Acknowledged {
            text: text.into(),
            expires_at: now + ACK_DURATION,
        });
    }

    /// The acknowledged text, if its window is still open at `now`.
    pub fn current(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|ack| now < ack.expires_at)
            .map(|ack| ack.text.as_str())
    }

    pub fn is_showing(&self, text: &str, now: Instant) -> bool {
        self.current(now) == Some(text)
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current
            .as_ref()
            .and_then(|ack| ack.expires_at.checked_duration_since(now))
            .filter(|left| !left.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clears_after_two_seconds() {
        let t0 = Instant::now();
        let mut ack = CopyAck::default();
        assert_eq!(ack.current(t0), None);

        ack.record("X", t0);
        assert_eq!(ack.current(t0), Some("X"));
        assert_eq!(ack.current(t0 + Duration::from_millis(1999)), Some("X"));
        assert_eq!(ack.current(t0 + ACK_DURATION), None);
        assert_eq!(ack.remaining(t0 + ACK_DURATION), None);
    }

    #[test]
    fn newer_copy_replaces_and_owns_the_deadline() {
        let t0 = Instant::now();
        let mut ack = CopyAck::default();
        ack.record("X", t0);

        let t1 = t0 + Duration::from_secs(1);
        ack.record("Y", t1);
        assert!(ack.is_showing("Y", t1));
        assert!(!ack.is_showing("X", t1));

        // X's deadline has passed, Y's has not.
        let t2 = t0 + Duration::from_millis(2500);
        assert_eq!(ack.current(t2), Some("Y"));
        assert_eq!(ack.remaining(t2), Some(Duration::from_millis(500)));

        assert_eq!(ack.current(t1 + ACK_DURATION), None);
    }

    #[test]
    fn same_text_rearms() {
        let t0 = Instant::now();
        let mut ack = CopyAck::default();
        ack.record("X", t0);
        let t1 = t0 + Duration::from_millis(1500);
        ack.record("X", t1);
        assert!(ack.is_showing("X", t0 + Duration::from_millis(3000)));
        assert!(!ack.is_showing("X", t1 + ACK_DURATION));
    }
}
