//! Procedural helper functions for web applications.
//!
//! A flat collection of independent utilities grouped by subject: array
//! manipulation, array-tree to XML conversion, blocking HTTP requests,
//! Italian-locale date formatting, geographic distance and string handling.
//! Each function is a self-contained transformation of its inputs; the only
//! state anywhere is the caller-owned alternation counter store.

pub mod array;
pub mod date;
pub mod geo;
pub mod http;
pub mod string;
pub mod value;
pub mod xml;

pub use value::{ArrayKey, ArraySerialize, ObjectValue, Value};

pub use array::{
    array_element, array_key_from_value, array_levels, array_ltrim, array_random,
    array_remove_empty, array_remove_empty_recursive, array_rtrim, array_trim, array_untrim,
    is_array_array, is_assoc, object_to_array,
};

pub use xml::{array_to_xml, xml_to_array, ATTRIBUTES_KEY, TEXT_KEY};

pub use http::{build_query, http_get, http_post, HttpError, RequestOptions, DEFAULT_TIMEOUT};

pub use date::date_it_to_iso8601;

pub use geo::{geo_distance, EARTH_RADIUS_KM};

pub use string::{
    add_dots, br2nl, random_alnum_string, random_alpha_string, random_string,
    reduce_double_slashes, str_ipart, str_part, str_rpart, trim_slashes, AlternateCounters,
};
