/// Symbolic visual theme derived from a condition description.
///
/// Presentation policy only: the mapping is a pure function of the
/// description text, so any front end can key colors or assets off the tag
/// without the core knowing about rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Drizzle,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
}

impl Theme {
    /// Map a free-text condition summary to a theme by substring match,
    /// case-insensitive. Unrecognized descriptions fall back to `Sunny`.
    pub fn for_description(description: &str) -> Self {
        let lower = description.to_lowercase();

        if lower.contains("thunder") {
            Self::Thunderstorm
        } else if lower.contains("drizzle") {
            Self::Drizzle
        } else if lower.contains("rain") || lower.contains("shower") {
            Self::Rain
        } else if lower.contains("snow") || lower.contains("sleet") {
            Self::Snow
        } else if lower.contains("mist") || lower.contains("fog") || lower.contains("haze") {
            Self::Mist
        } else if lower.contains("few clouds") || lower.contains("scattered") {
            Self::PartlyCloudy
        } else if lower.contains("cloud") || lower.contains("overcast") {
            Self::Cloudy
        } else {
            Self::Sunny
        }
    }

    /// Terminal glyph for the theme.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Sunny => "☀",
            Self::PartlyCloudy => "⛅",
            Self::Cloudy => "☁",
            Self::Drizzle => "🌦",
            Self::Rain => "🌧",
            Self::Thunderstorm => "⛈",
            Self::Snow => "❄",
            Self::Mist => "🌫",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_sky_maps_to_sunny() {
        assert_eq!(Theme::for_description("clear sky"), Theme::Sunny);
    }

    #[test]
    fn cloud_variants_map_by_specificity() {
        assert_eq!(Theme::for_description("few clouds"), Theme::PartlyCloudy);
        assert_eq!(Theme::for_description("scattered clouds"), Theme::PartlyCloudy);
        assert_eq!(Theme::for_description("broken clouds"), Theme::Cloudy);
        assert_eq!(Theme::for_description("overcast clouds"), Theme::Cloudy);
    }

    #[test]
    fn precipitation_maps_to_wet_themes() {
        assert_eq!(Theme::for_description("light rain"), Theme::Rain);
        assert_eq!(Theme::for_description("shower rain"), Theme::Rain);
        assert_eq!(Theme::for_description("light intensity drizzle"), Theme::Drizzle);
        assert_eq!(Theme::for_description("thunderstorm with rain"), Theme::Thunderstorm);
        assert_eq!(Theme::for_description("light snow"), Theme::Snow);
    }

    #[test]
    fn obscurants_map_to_mist() {
        assert_eq!(Theme::for_description("mist"), Theme::Mist);
        assert_eq!(Theme::for_description("fog"), Theme::Mist);
        assert_eq!(Theme::for_description("haze"), Theme::Mist);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(Theme::for_description("Heavy Rain"), Theme::Rain);
    }

    #[test]
    fn unknown_description_falls_back_to_sunny() {
        assert_eq!(Theme::for_description("volcanic ash"), Theme::Sunny);
    }
}
