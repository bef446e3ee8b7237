use super::random::alphanumeric;

const MEASUREMENT_CHALLENGE: &str = "favicon.ico";
const NORMAL_SUFFIX: &str = "/pixel.png";

/// Produces the path suffix a reporter is asked to fetch. In measurement
/// mode this is the constant `favicon.ico`, used for calibration runs
/// against a universally-existing path; otherwise it is a random
/// alphanumeric string the length of a Let's Encrypt challenge, so the
/// wire-level footprint of a probe is indistinguishable from one.
pub struct ChallengeGenerator {
    measurement_mode: bool,
    challenge_len: usize,
}

impl ChallengeGenerator {
    pub fn new(measurement_mode: bool, challenge_len: usize) -> Self {
        Self {
            measurement_mode,
            challenge_len,
        }
    }

    pub fn generate(&self) -> String {
        if self.measurement_mode {
            return MEASUREMENT_CHALLENGE.to_string();
        }
        let mut challenge = alphanumeric(self.challenge_len);
        challenge.push_str(NORMAL_SUFFIX);
        challenge
    }
}
