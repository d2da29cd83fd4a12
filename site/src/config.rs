//! Fixed site configuration (single source of truth for tunables).

/// Base URL of the remote content API.
pub const API_BASE: &str = "https://portfolio-backend-xvu9.onrender.com/api";

/// Third-party form relay that receives a copy of every contact message.
pub const FORM_RELAY_URL: &str = "https://formspree.io/f/xdkddonq";

/// Brand strings shown in the nav.
pub const SITE_OWNER: &str = "David Kori";
pub const SITE_INITIALS: &str = "DK";

/// Offset added to the scroll position before matching section bounds,
/// compensating for the fixed navbar height.
pub const NAV_SCROLL_OFFSET_PX: f64 = 100.0;

/// Intersection ratio a section must exceed to claim the active slot.
pub const ACTIVE_RATIO_THRESHOLD: f64 = 0.5;

/// Observer geometry for active-section tracking.
pub const OBSERVER_ROOT_MARGIN: &str = "-20% 0px -80% 0px";
pub const OBSERVER_THRESHOLDS: [f64; 3] = [0.1, 0.5, 0.8];

/// Ratio past which a revealed element counts as visible (fade-in gate).
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Delay before re-asserting the active section after an explicit jump,
/// suppressing flicker while the smooth scroll races the trackers.
pub const SETTLE_DELAY_MS: u64 = 100;

/// How long the contact form status banner stays up before self-clearing.
pub const STATUS_BANNER_MS: u64 = 3000;
