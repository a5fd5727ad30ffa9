pub mod components;
pub mod config;
pub mod controller;
mod effect_executor;
pub mod host;
pub mod i18n;
pub mod layout;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod store;
pub mod sync;

pub use components::{use_shell_runtime, ShellLayout, ShellProvider, ShellRuntimeContext};
pub use config::{
    boot_state, load_shell_config, parse_boot_overrides, BootOverrides, ShellConfig,
    ShellConfigError,
};
pub use controller::ShellController;
pub use host::ShellHostContext;
pub use i18n::{tx, tx_tag, Localized};
pub use layout::{
    content_leading_offset_px, content_offset_class, content_offset_style, LayoutFrame,
};
pub use model::*;
pub use reducer::{reduce_shell, ShellAction};
pub use store::{MemoryShellStore, ShellListener, ShellStore, SubscriptionId};
pub use sync::{ChannelOutcome, ChannelPhase, DocumentSync, EffectChannel, SyncReport};
