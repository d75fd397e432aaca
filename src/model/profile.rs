use serde::{Deserialize, Serialize};

/// Tunable constants of the scoring engine. The honor-lock ceiling is not
/// part of the profile; it is fixed policy in the gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringProfile {
    /// Extrapolated scores above this value grow at `soft_cap_factor` per point.
    pub soft_cap_start: f64,
    pub soft_cap_factor: f64,
    pub muscle_amplifier: f64,
    pub ffmi_height_threshold_m: f64,
    pub ffmi_height_coefficient: f64,
    pub suspicious_epsilon: f64,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            soft_cap_start: 120.0,
            soft_cap_factor: 0.5,
            muscle_amplifier: 1.25,
            ffmi_height_threshold_m: 1.8,
            ffmi_height_coefficient: 6.0,
            suspicious_epsilon: 1e-6,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("softCapStart", self.soft_cap_start),
            ("softCapFactor", self.soft_cap_factor),
            ("muscleAmplifier", self.muscle_amplifier),
            ("ffmiHeightThresholdM", self.ffmi_height_threshold_m),
            ("ffmiHeightCoefficient", self.ffmi_height_coefficient),
            ("suspiciousEpsilon", self.suspicious_epsilon),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a finite non-negative number, got {value}"));
            }
        }
        if self.soft_cap_factor > 1.0 {
            return Err(format!(
                "softCapFactor must not exceed 1.0, got {}",
                self.soft_cap_factor
            ));
        }
        if self.soft_cap_start < 100.0 {
            return Err(format!(
                "softCapStart must be at least 100, got {}",
                self.soft_cap_start
            ));
        }
        Ok(())
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
