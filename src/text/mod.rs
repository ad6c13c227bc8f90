// Text utilities - normalization, word boundaries and protected-context detection
//
// Everything here is a pure function over &str. Positions are byte offsets that
// must fall on char boundaries.

mod context;
mod normalize;

pub use context::{
    is_inside_email, is_inside_fenced_code_block, is_inside_inline_code, is_inside_url,
    special_context, SpecialContext,
};
pub use normalize::{
    escape_for_regex, is_part_of_larger_token, is_word_boundary, is_word_char, normalize, Side,
};
