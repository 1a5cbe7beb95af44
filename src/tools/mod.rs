// Litlens tools - consumers of the component model

// Each tool is a thin view over `Component` and the tag resolver
pub mod completion;
pub mod navigation;
pub mod outline;
pub mod status;

pub use completion::{CompletionItem, CompletionKind, complete_for_tag};
pub use navigation::{Definition, Location, TagMention, goto_definition, tag_at_offset, tag_mentions};
pub use outline::{OutlineNode, outline_file};
pub use status::{ComponentSummary, WorkspaceStatus};
