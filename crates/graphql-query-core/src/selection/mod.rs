mod field;
mod field_builder;
mod field_slot;
mod fragment;
mod fragment_builder;
mod inline_fragment;
mod inline_fragment_builder;

pub use field::Field;
pub use field_builder::FieldBuilder;
pub use field_slot::FieldSlot;
pub(crate) use field_slot::render_slots;
pub(crate) use field_slot::require_slots;
pub use fragment::Fragment;
pub use fragment_builder::FragmentBuilder;
pub use inline_fragment::InlineFragment;
pub use inline_fragment_builder::InlineFragmentBuilder;

#[cfg(test)]
mod tests;
