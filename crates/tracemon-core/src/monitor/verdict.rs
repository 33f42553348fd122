//! Verdict interpretation of raw monitor output

use serde::{Deserialize, Serialize};

/// Token the monitor prints before every verdict it emits
const VERDICT_TOKEN: &str = "finalVerdict";

/// Permanent violation: no extension of the trace can satisfy the property
const DEFINITE_VIOLATION: &str = "finalVerdict = -2";

/// Violated so far, but later events may still change the outcome
const PROVISIONAL_VIOLATION: &str = "finalVerdict = -1";

/// Three-valued verdict for one trace snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Whether the property holds
    pub outcome: bool,
    /// Whether no further trace data can change `outcome`
    pub is_definite: bool,
}

impl Verdict {
    pub const DEFINITE_FALSE: Self = Self {
        outcome: false,
        is_definite: true,
    };

    pub const PROVISIONAL_FALSE: Self = Self {
        outcome: false,
        is_definite: false,
    };

    pub const PROVISIONAL_TRUE: Self = Self {
        outcome: true,
        is_definite: false,
    };
}

/// Classify monitor output into a [`Verdict`].
///
/// A `finalVerdict = -2` anywhere wins outright. Otherwise only the text from
/// the last `finalVerdict` onwards counts: `-1` there is a provisional
/// violation, anything else (or no verdict at all) is a provisional pass.
pub fn interpret(output: &str) -> Verdict {
    if output.contains(DEFINITE_VIOLATION) {
        return Verdict::DEFINITE_FALSE;
    }

    let last_verdict = output
        .rfind(VERDICT_TOKEN)
        .map(|position| &output[position..])
        .unwrap_or("");

    if last_verdict.contains(PROVISIONAL_VIOLATION) {
        return Verdict::PROVISIONAL_FALSE;
    }

    Verdict::PROVISIONAL_TRUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definite_violation_anywhere() {
        assert_eq!(interpret("finalVerdict = -2"), Verdict::DEFINITE_FALSE);
        assert_eq!(
            interpret("x\nfinalVerdict = -2\ny\nfinalVerdict = 0\n"),
            Verdict::DEFINITE_FALSE
        );
    }

    #[test]
    fn test_definite_violation_short_circuits_later_verdicts() {
        let output = "... finalVerdict = -2 ... finalVerdict = 1";
        assert_eq!(interpret(output), Verdict::DEFINITE_FALSE);
    }

    #[test]
    fn test_provisional_violation() {
        assert_eq!(
            interpret("step1 ok finalVerdict = -1"),
            Verdict::PROVISIONAL_FALSE
        );
    }

    #[test]
    fn test_empty_output_is_provisional_pass() {
        assert_eq!(interpret(""), Verdict::PROVISIONAL_TRUE);
    }

    #[test]
    fn test_no_verdict_token_is_provisional_pass() {
        assert_eq!(
            interpret("1: x = 3\n2: y = 4\n"),
            Verdict::PROVISIONAL_TRUE
        );
    }

    #[test]
    fn test_only_last_verdict_counts() {
        let output = "1: finalVerdict = -1\n2: finalVerdict = 0\n";
        assert_eq!(interpret(output), Verdict::PROVISIONAL_TRUE);

        let output = "1: finalVerdict = 0\n2: finalVerdict = -1\n";
        assert_eq!(interpret(output), Verdict::PROVISIONAL_FALSE);
    }

    #[test]
    fn test_unknown_verdict_values_are_provisional_pass() {
        assert_eq!(interpret("finalVerdict = 1"), Verdict::PROVISIONAL_TRUE);
        assert_eq!(interpret("finalVerdict = -3"), Verdict::PROVISIONAL_TRUE);
        assert_eq!(interpret("finalVerdict"), Verdict::PROVISIONAL_TRUE);
    }

    #[test]
    fn test_violation_text_must_follow_last_token() {
        // "-1" text before the final token is outside the suffix
        let output = "finalVerdict = -1 then finalVerdict= -1";
        assert_eq!(interpret(output), Verdict::PROVISIONAL_TRUE);
    }

    #[test]
    fn test_interpret_is_deterministic() {
        let output = "a finalVerdict = -1 b";
        assert_eq!(interpret(output), interpret(output));
    }

    #[test]
    fn test_verdict_serializes_camel_case() {
        let json = serde_json::to_value(Verdict::PROVISIONAL_FALSE).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": false, "isDefinite": false}));
    }
}
