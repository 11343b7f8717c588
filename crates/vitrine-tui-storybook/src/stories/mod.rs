// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Story definitions for every widget in the gallery.

mod card_list;
mod dropdown;
mod header;
mod marquee;
mod status_bar;
mod text_input;
mod toast;
mod typewriter;

pub use card_list::card_list_story;
pub use dropdown::dropdown_story;
pub use header::header_story;
pub use marquee::marquee_story;
pub use status_bar::status_bar_story;
pub use text_input::text_input_story;
pub use toast::toast_story;
pub use typewriter::typewriter_story;

use crate::StoryRegistry;

/// Register every story in display order.
pub fn register_all(registry: &mut StoryRegistry) {
	registry.register(header_story());
	registry.register(status_bar_story());
	registry.register(card_list_story());
	registry.register(text_input_story());
	registry.register(toast_story());
	registry.register(typewriter_story());
	registry.register(dropdown_story());
	registry.register(marquee_story());
}
