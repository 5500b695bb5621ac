use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::anim::{Axis, TransMode};
use crate::config::GasketConfig;
use crate::error::{GasketError, Result};

#[derive(Parser, Debug, Clone)]
#[command(name = "gasket")]
#[command(about = "Animated 3D Sierpinski gasket", long_about = None)]
pub struct Cli {
    /// JSON settings file, flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Subdivision depth
    #[arg(long, allow_negative_numbers = true)]
    pub division: Option<i32>,

    #[arg(long)]
    pub speed: Option<f64>,

    /// Rotation amplitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub degree: Option<f64>,

    /// Scale reached by the grow phase
    #[arg(long = "scale-fac")]
    pub scale_fac: Option<f64>,

    /// 0 still, 1 rotating, 2 dancing, 3 flipping, 4 paralysing
    #[arg(long = "trans-mode")]
    pub trans_mode: Option<u8>,

    /// Axes to rotate about, e.g. `--rotate x,z`
    #[arg(long, value_enum, value_delimiter = ',')]
    pub rotate: Option<Vec<AxisArg>>,

    /// Four face colors, e.g. `--colors '#00ffff,#00801a,#00ff99,#e64d33'`
    #[arg(long, value_delimiter = ',')]
    pub colors: Option<Vec<String>>,

    /// Seed for the paralysing jitter
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run without a window
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Ticks to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    pub ticks: u64,

    /// Log the transform every N headless frames, 0 to disable
    #[arg(long = "log-every", default_value_t = 60)]
    pub log_every: u64,

    /// Write the generated mesh as JSON
    #[arg(long = "dump-mesh")]
    pub dump_mesh: Option<PathBuf>,

    /// Print the effective settings as JSON and exit
    #[arg(long = "print-config", default_value = "false")]
    pub print_config: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Axis {
        match arg {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
            AxisArg::Z => Axis::Z,
        }
    }
}

impl Cli {
    /// Overlay the flags that were given onto `config`
    pub fn apply_to(&self, config: &mut GasketConfig) -> Result<()> {
        if let Some(division) = self.division {
            config.division = division;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(degree) = self.degree {
            config.degree = degree;
        }
        if let Some(scale_fac) = self.scale_fac {
            config.scale_fac = scale_fac;
        }
        if let Some(mode) = self.trans_mode {
            config.trans_mode = TransMode::try_from(mode)?;
        }
        if let Some(axes) = &self.rotate {
            config.rotate_xyz = [false; 3];
            for &axis in axes {
                config.rotate_xyz[Axis::from(axis).index()] = true;
            }
        }
        if let Some(colors) = &self.colors {
            let colors: [String; 4] = colors.clone().try_into().map_err(|c: Vec<String>| {
                GasketError::InvalidConfiguration(format!(
                    "expected 4 colors, got {}",
                    c.len()
                ))
            })?;
            config.colors = colors;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()
    }
}
