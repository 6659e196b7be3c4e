/// Page wiring constants: element ids, class names and intro timings.
///
/// These name the DOM contract the crate expects from the host page so that
/// string literals stay out of the event and splash code.
// Containers
pub const MAIN_CONTENT_ID: &str = "main-content";
pub const SPLASH_SCREEN_ID: &str = "splash-screen";

// Splash contents
pub const LOGO_CONTAINER_CLASS: &str = "logo-container";
pub const LOGO_CIRCLE_CLASS: &str = "logo-circle";
pub const LOGO_SRC: &str = "assets/images/letter-logo.png";
pub const LOGO_ALT: &str = "Logo";

// Splash sequencing
pub const SPLASH_HOLD_MS: i32 = 1500; // slightly longer than the 1.2s logo animation
pub const RISE_UP_CLASS: &str = "rise-up";
pub const RISE_UP_ANIMATION: &str = "riseUp";

// Canvas
pub const CANVAS_HIDDEN_STYLE: &str = "visibility:hidden";
pub const CANVAS_VISIBLE_STYLE: &str = "visibility:visible";

// Prefix of the data attributes read into `FieldConfig`
pub const CONFIG_ATTR_PREFIX: &str = "data-";

// User agents treated as touch-only devices
pub const MOBILE_UA_MARKERS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];
