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

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::HarnessError;

/// Install a global tracing subscriber for benchmark diagnostics.
///
/// `RUST_LOG` wins when set; otherwise the level is DEBUG if `debug` is set, INFO if not.
/// Calling this more than once is an error, reported rather than panicking.
pub fn init_tracing(debug: bool) -> Result<(), HarnessError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => EnvFilter::new(if debug { "debug" } else { "info" }),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_ansi(true)
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init()
        .map_err(|e| HarnessError::Tracing(e.to_string()))
}
