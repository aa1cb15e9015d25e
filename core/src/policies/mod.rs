use crate::traits::SignalPolicy;
use serde::{Deserialize, Serialize};

pub mod fixed_timer;
pub mod smart;

/// Operator settings a policy may read when it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyParams {
    pub fixed_duration_secs: u64,
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self { fixed_duration_secs: crate::config::DEFAULT_FIXED_DURATION_SECS }
    }
}

macro_rules! register_policies {
    ($($label:expr => $mode:ident => $type:ty),* $(,)?) => {
        /// Switching strategy selected by the operator.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ControlMode {
            $($mode),*
        }

        impl ControlMode {
            pub const ALL: &'static [ControlMode] = &[$(ControlMode::$mode),*];

            pub fn label(self) -> &'static str {
                match self {
                    $(ControlMode::$mode => $label,)*
                }
            }
        }

        pub fn create_policy(mode: ControlMode, params: &PolicyParams) -> Box<dyn SignalPolicy> {
            match mode {
                $(
                    ControlMode::$mode => Box::new(<$type>::from(params)),
                )*
            }
        }

        pub fn get_palette_info() -> Vec<(ControlMode, String, [u8; 3])> {
            vec![
                $(
                    {
                        let tmp: $type = Default::default();
                        (ControlMode::$mode, tmp.palette_description().to_string(), tmp.palette_color_rgb())
                    }
                ),*
            ]
        }
    };
}

register_policies!(
    "Fixed-Timer" => FixedTimer => fixed_timer::FixedTimer,
    "Smart Control" => SmartControl => smart::SmartControl,
);

impl std::fmt::Display for ControlMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
