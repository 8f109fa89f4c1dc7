/// Easing curve mapping normalized time to eased progress.
///
/// Inputs are clamped to `[0, 1]`. Outputs are not: `Elastic` and `Back` overshoot on purpose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// Quadratic acceleration from zero velocity.
    EaseIn,
    /// Quadratic deceleration to zero velocity.
    EaseOut,
    /// Quadratic acceleration until `t = 0.5`, then deceleration.
    EaseInOut,
    /// Four-segment decaying bounce that settles at `1`.
    Bounce,
    /// Exponentially decaying sine around `1`.
    Elastic,
    /// Cubic curve that dips below `0` before heading to `1`.
    Back,
}

const BACK_OVERSHOOT: f64 = 1.70158;
const ELASTIC_PERIOD: f64 = 0.3;

impl Ease {
    /// Map `t` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Self::Bounce => bounce_out(t),
            Self::Elastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = ELASTIC_PERIOD / 4.0;
                2f64.powf(-10.0 * t) * ((t - s) * std::f64::consts::TAU / ELASTIC_PERIOD).sin() + 1.0
            }
            Self::Back => {
                let c3 = BACK_OVERSHOOT + 1.0;
                c3 * t * t * t - BACK_OVERSHOOT * t * t
            }
        }
    }
}

fn bounce_out(t: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
