use serde::Serialize;

/// Display height bucket for a logo in the scrolling banner.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogoSize {
    Small,
    Medium,
    Large,
}

impl LogoSize {
    pub fn css_class(self) -> &'static str {
        match self {
            LogoSize::Small => "logo-sm",
            LogoSize::Medium => "logo-md",
            LogoSize::Large => "logo-lg",
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct Logo {
    pub src: &'static str,
    pub alt: &'static str,
    pub size: LogoSize,
}

pub static LOGOS: [Logo; 8] = [
    Logo { src: "/static/logos/rapidsos.jpg", alt: "RapidSOS", size: LogoSize::Medium },
    Logo { src: "/static/logos/deloitte.jpg", alt: "Deloitte", size: LogoSize::Medium },
    Logo { src: "/static/logos/pwc.jpg", alt: "PwC", size: LogoSize::Small },
    Logo { src: "/static/logos/ontariohealth.jpg", alt: "Ontario Health", size: LogoSize::Small },
    Logo { src: "/static/logos/markid.png", alt: "Markid", size: LogoSize::Large },
    Logo { src: "/static/logos/ivey.jpg", alt: "Ivey", size: LogoSize::Small },
    Logo { src: "/static/logos/rotman.jpg", alt: "Rotman/University of Toronto", size: LogoSize::Large },
    Logo { src: "/static/logos/cocacola.jpg", alt: "Coca Cola", size: LogoSize::Small },
];

/// The banner track: every logo twice, so a -50% translate loops seamlessly.
pub fn banner_track() -> Vec<&'static Logo> {
    LOGOS.iter().chain(LOGOS.iter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_repeats_logos_once() {
        let track = banner_track();
        assert_eq!(track.len(), LOGOS.len() * 2);
        assert_eq!(track[0].alt, track[LOGOS.len()].alt);
    }
}
