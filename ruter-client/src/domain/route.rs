//! Transit line types.

use std::fmt;

/// Mode of transport for a line, as reported by the journey planner.
///
/// Parsing is total: modes this crate does not know about are carried
/// through as [`TransportMode::Other`] rather than rejected, so new API
/// values degrade gracefully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportMode {
    Metro,
    Bus,
    Tram,
    Water,
    /// Any other mode string (e.g. "rail", "coach"), kept verbatim.
    Other(String),
}

impl TransportMode {
    /// Parse a mode string from the API. Never fails.
    pub fn parse(s: &str) -> Self {
        match s {
            "metro" => TransportMode::Metro,
            "bus" => TransportMode::Bus,
            "tram" => TransportMode::Tram,
            "water" => TransportMode::Water,
            other => TransportMode::Other(other.to_string()),
        }
    }

    /// Display glyph for this mode.
    ///
    /// Unknown modes return their raw mode string so they remain visible
    /// in rendered output rather than disappearing.
    pub fn icon(&self) -> &str {
        match self {
            TransportMode::Metro => "🚇",
            TransportMode::Bus => "🚌",
            TransportMode::Tram => "🚊",
            TransportMode::Water => "⛴",
            TransportMode::Other(s) => s,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Metro => f.write_str("metro"),
            TransportMode::Bus => f.write_str("bus"),
            TransportMode::Tram => f.write_str("tram"),
            TransportMode::Water => f.write_str("water"),
            TransportMode::Other(s) => f.write_str(s),
        }
    }
}

/// A transit line serving a stop.
///
/// Immutable after construction; built from the journey planner's
/// `line {id, name, transportMode}` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    line_id: String,
    name: String,
    transport_mode: TransportMode,
}

impl Route {
    /// Create a route from its line id, name and transport mode.
    pub fn new(line_id: impl Into<String>, name: impl Into<String>, mode: TransportMode) -> Self {
        Self {
            line_id: line_id.into(),
            name: name.into(),
            transport_mode: mode,
        }
    }

    /// Full namespaced line id, e.g. `"RUT:Line:5"`.
    pub fn line_id(&self) -> &str {
        &self.line_id
    }

    /// Human-readable line name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transport mode of the line.
    pub fn transport_mode(&self) -> &TransportMode {
        &self.transport_mode
    }

    /// The short line number: everything after the last `':'` of the
    /// line id, or the whole id if it contains no colon.
    pub fn line_number(&self) -> &str {
        match self.line_id.rfind(':') {
            Some(i) => &self.line_id[i + 1..],
            None => &self.line_id,
        }
    }

    /// Display glyph for the line's transport mode.
    pub fn icon(&self) -> &str {
        self.transport_mode.icon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_modes_map_to_glyphs() {
        assert_eq!(TransportMode::parse("metro").icon(), "🚇");
        assert_eq!(TransportMode::parse("bus").icon(), "🚌");
        assert_eq!(TransportMode::parse("tram").icon(), "🚊");
        assert_eq!(TransportMode::parse("water").icon(), "⛴");
    }

    #[test]
    fn unknown_mode_passes_through() {
        let mode = TransportMode::parse("funicular");
        assert_eq!(mode, TransportMode::Other("funicular".to_string()));
        assert_eq!(mode.icon(), "funicular");
    }

    #[test]
    fn line_number_takes_suffix_after_last_colon() {
        let route = Route::new("RUT:Line:5", "Sognsvann", TransportMode::Metro);
        assert_eq!(route.line_number(), "5");

        let route = Route::new("RUT:Line:31E", "Snarøya", TransportMode::Bus);
        assert_eq!(route.line_number(), "31E");
    }

    #[test]
    fn line_number_without_colon_is_whole_id() {
        let route = Route::new("5", "Sognsvann", TransportMode::Metro);
        assert_eq!(route.line_number(), "5");
    }

    #[test]
    fn line_number_with_trailing_colon_is_empty() {
        let route = Route::new("RUT:Line:", "odd", TransportMode::Bus);
        assert_eq!(route.line_number(), "");
    }

    #[test]
    fn mode_display_round_trips_known_names() {
        assert_eq!(TransportMode::parse("metro").to_string(), "metro");
        assert_eq!(TransportMode::parse("rail").to_string(), "rail");
    }
}
