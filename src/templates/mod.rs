// Individual template files
pub mod index_template;
pub mod loading_template;

// Re-export all templates
pub use index_template::{EditorView, IndexTemplate};
pub use loading_template::LoadingTemplate;
