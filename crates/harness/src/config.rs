// Copyright (C) 2026 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::HarnessError;

/// Prefix for environment overrides, e.g. `CONTRAST_SHOW_FULL_TYPE=true`.
pub const ENV_PREFIX: &str = "CONTRAST_";

/// When to emit ANSI colors in reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Defer to terminal detection and `NO_COLOR`/`CLICOLOR`.
    #[default]
    Auto,
    Always,
    Never,
}

/// How comparisons are labelled and rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Label containers with their full type name instead of "Container 1"/"Container 2".
    pub show_full_type: bool,
    pub color: ColorChoice,
    /// Finish each comparison with a summary table.
    pub summary_table: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_full_type: false,
            color: ColorChoice::Auto,
            summary_table: true,
        }
    }
}

impl ReportConfig {
    /// Defaults, overridden by `CONTRAST_*` environment variables.
    pub fn figment() -> Figment {
        Self::layered(None)
    }

    /// Defaults, then the YAML file if given, then the environment.
    pub fn layered(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(ReportConfig::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_env() -> Result<Self, HarnessError> {
        Ok(Self::figment().extract()?)
    }

    pub fn load(config_file: Option<&Path>) -> Result<Self, HarnessError> {
        Ok(Self::layered(config_file).extract()?)
    }
}
