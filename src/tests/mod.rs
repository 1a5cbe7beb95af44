// Litlens test infrastructure
//
// Unit tests for the TypeScript/JavaScript front end, the component
// extractor, the tag resolver, workspace scanning and the tools. Sources are
// parsed with the real tree-sitter grammars.

pub mod helpers;


// ============================================================================
// COMPONENT TESTS - membership, tag names, fields, events, styles
// ============================================================================
pub mod component {
    pub mod build; // try_build_component contract
    pub mod events; // Event discovery
    pub mod fields; // Property / state / private classification
    pub mod membership; // is_component_class
    pub mod observer; // Diagnostics hooks
    pub mod styles; // Style detection
    pub mod tag_name; // Tag name strategies
}



// ============================================================================
// TOOLS TESTS - outline, completion, navigation, status, output
// ============================================================================
pub mod tools {
    pub mod completion;
    pub mod navigation;
    pub mod outline;
    pub mod output;
    pub mod status;
}
