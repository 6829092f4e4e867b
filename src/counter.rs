//! Number animation for the hero stats.
//!
//! Everything in here is plain arithmetic so it can be exercised off the
//! browser; the frame loop that drives it lives in
//! `components::stat_counter`.

pub const ANIMATION_DURATION_MS: f64 = 2000.0;

/// Share of the stats container that has to be on screen before counting starts.
pub const TRIGGER_THRESHOLD: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suffix {
    Percent,
    Plus,
}

impl Suffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suffix::Percent => "%",
            Suffix::Plus => "+",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterSpec {
    pub target: f64,
    pub has_decimal: bool,
    pub suffix: Suffix,
}

impl CounterSpec {
    /// Reads a `data-target` value. Anything with a decimal point counts as a
    /// percentage; zero or garbage gives `None` and the stat is left alone.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let target: f64 = raw.parse().ok()?;
        if !target.is_finite() || target <= 0.0 {
            return None;
        }
        let has_decimal = raw.contains('.');
        Some(Self {
            target,
            has_decimal,
            suffix: if has_decimal { Suffix::Percent } else { Suffix::Plus },
        })
    }

    pub fn format(&self, value: f64) -> String {
        let body = if self.has_decimal {
            let fixed = format!("{:.1}", value);
            match fixed.split_once('.') {
                Some((int_part, frac)) => format!("{}.{}", group_thousands(int_part), frac),
                None => fixed,
            }
        } else {
            group_thousands(&format!("{}", value.floor() as i64))
        };
        format!("{}{}", body, self.suffix.as_str())
    }

    /// What the stat shows before its run starts.
    pub fn initial_text(&self) -> String {
        self.format(0.0)
    }
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{}{}", sign, out)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub text: String,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct AnimationRun {
    spec: CounterSpec,
    started_at_ms: f64,
    duration_ms: f64,
}

impl AnimationRun {
    pub fn start(spec: CounterSpec, now_ms: f64) -> Self {
        Self {
            spec,
            started_at_ms: now_ms,
            duration_ms: ANIMATION_DURATION_MS,
        }
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        let elapsed = (now_ms - self.started_at_ms).max(0.0);
        (elapsed / self.duration_ms).min(1.0)
    }

    pub fn frame(&self, now_ms: f64) -> Frame {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return Frame {
                text: self.spec.format(self.spec.target),
                finished: true,
            };
        }
        let current = self.spec.target * ease_out_cubic(progress);
        Frame {
            text: self.spec.format(current),
            finished: false,
        }
    }
}

/// Fires once per stats container. Owned by the container component so a
/// fresh mount gets a fresh trigger and nothing global is involved.
#[derive(Debug, Default)]
pub struct CounterTrigger {
    fired: bool,
}

impl CounterTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only the first time it is called with `intersecting`.
    pub fn fire(&mut self, intersecting: bool) -> bool {
        if !intersecting || self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_targets_are_percentages() {
        let spec = CounterSpec::parse("98.5").unwrap();
        assert!(spec.has_decimal);
        assert_eq!(spec.suffix, Suffix::Percent);
        assert_eq!(spec.format(98.5), "98.5%");
    }

    #[test]
    fn integer_targets_are_counts() {
        let spec = CounterSpec::parse("500").unwrap();
        assert!(!spec.has_decimal);
        assert_eq!(spec.suffix, Suffix::Plus);
    }

    #[test]
    fn zero_and_garbage_are_skipped() {
        assert!(CounterSpec::parse("0").is_none());
        assert!(CounterSpec::parse("").is_none());
        assert!(CounterSpec::parse("lots").is_none());
        assert!(CounterSpec::parse("-5").is_none());
    }

    #[test]
    fn final_frame_shows_exact_target() {
        let spec = CounterSpec::parse("1234.5").unwrap();
        let run = AnimationRun::start(spec, 100.0);
        let frame = run.frame(100.0 + ANIMATION_DURATION_MS);
        assert!(frame.finished);
        assert_eq!(frame.text, "1,234.5%");

        let run = AnimationRun::start(CounterSpec::parse("500").unwrap(), 0.0);
        assert_eq!(run.frame(5000.0).text, "500+");
    }

    #[test]
    fn large_counts_are_grouped() {
        let spec = CounterSpec::parse("1250000").unwrap();
        assert_eq!(spec.format(1_250_000.0), "1,250,000+");
        assert_eq!(spec.format(999.9), "999+");
        assert_eq!(spec.initial_text(), "0+");
    }

    #[test]
    fn intermediate_frames_follow_ease_out() {
        let spec = CounterSpec::parse("1000").unwrap();
        let run = AnimationRun::start(spec, 0.0);

        let half = run.frame(1000.0);
        assert!(!half.finished);
        // 1 - 0.5^3 = 0.875
        assert_eq!(half.text, "875+");

        assert_eq!(run.frame(0.0).text, "0+");
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn frames_before_start_clamp_to_zero() {
        let run = AnimationRun::start(CounterSpec::parse("50").unwrap(), 500.0);
        assert_eq!(run.progress(400.0), 0.0);
    }

    #[test]
    fn trigger_fires_once() {
        let mut trigger = CounterTrigger::new();
        assert!(!trigger.fire(false));
        assert!(trigger.fire(true));
        assert!(!trigger.fire(true));
        assert!(!trigger.fire(false));
    }
}
