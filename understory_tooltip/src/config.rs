// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-overridable tooltip constants.

/// Timing and geometry constants for a tooltip.
///
/// Times are milliseconds on the host's clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipConfig {
    /// Delay between hovering an anchor and opening its tooltip.
    pub show_delay_ms: u64,
    /// Delay between leaving an anchor and closing the tooltip.
    pub close_delay_ms: u64,
    /// Offset reserved for the decorative arrow.
    ///
    /// Hosts typically derive this from the rendered border width of the arrow.
    pub arrow_padding: f64,
}

impl TooltipConfig {
    /// Default show delay.
    pub const DEFAULT_SHOW_DELAY_MS: u64 = 500;
    /// Default close delay.
    pub const DEFAULT_CLOSE_DELAY_MS: u64 = 200;

    /// Create a configuration with default delays and no arrow padding.
    pub const fn new() -> Self {
        Self {
            show_delay_ms: Self::DEFAULT_SHOW_DELAY_MS,
            close_delay_ms: Self::DEFAULT_CLOSE_DELAY_MS,
            arrow_padding: 0.0,
        }
    }

    /// Set the show delay.
    #[must_use]
    pub const fn with_show_delay(mut self, ms: u64) -> Self {
        self.show_delay_ms = ms;
        self
    }

    /// Set the close delay.
    #[must_use]
    pub const fn with_close_delay(mut self, ms: u64) -> Self {
        self.close_delay_ms = ms;
        self
    }

    /// Set the arrow padding.
    #[must_use]
    pub const fn with_arrow_padding(mut self, padding: f64) -> Self {
        self.arrow_padding = padding;
        self
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self::new()
    }
}
