/// Deepest parenthesis nesting accepted before reduction gives up
pub const MAX_GROUP_DEPTH: usize = 256;
