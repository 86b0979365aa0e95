//! Configuration section definitions.
//!
//! | Module     | Input field            | Purpose                           |
//! |------------|------------------------|-----------------------------------|
//! | `base`     | `base`                 | Deployment path prefix            |
//! | `nav`      | `themeConfig.nav`      | Top navigation entries            |
//! | `sidebar`  | `themeConfig.sidebar`  | Per-section navigation            |
//! | `validate` | (loader options)       | Soft checks and strictness        |

mod base;
mod nav;
mod sidebar;
mod validate;

pub use base::{normalize_base, resolve_link};
pub use nav::{Link, NavItem, validate_items};
pub use sidebar::{
    GLOBAL_KEY, Sidebar, SidebarSection, check_keys_against_nav, validate_sidebar,
};
pub use validate::{CheckLevel, ExternalLinkConfig, ValidateConfig};
