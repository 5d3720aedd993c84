/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Style options.
//!
//! Every option space that the style format encodes as a small integer code
//! is a closed enum here; every struct deserializes with defaults so a style
//! only has to spell out what it changes.

pub mod bibliography;
pub mod citation;
pub mod creators;
pub mod dates;
pub mod numbers;
pub mod titles;

pub use bibliography::{BibliographyOptions, EditorSwitch, FootnoteOptions};
pub use citation::{
    AmbiguityStrategy, CitationMode, CitationOptions, EndnoteMarker, EndnoteStyle, SameIdOrder,
};
pub use creators::{
    CreatorRewrite, CreatorRole, CreatorStyle, CreatorStyles, FirstNameForm, InitialsStyle,
    ListTruncation, NameOrder, RepeatPolicy,
};
pub use dates::{DateOptions, DateOrder, DayFormat, MonthFormat};
pub use numbers::{EditionFormat, PageFormat, RunningTimeFormat};
pub use titles::TitleCapitalization;
