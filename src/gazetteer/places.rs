/// Ordered table mapping a place name to a representative coordinate.
///
/// Scan order is the tie-break: a city is listed before the prefecture that
/// contains it (札幌 before 北海道), and the first name that occurs as a
/// substring of the input wins. No longest-match preference and no overlap
/// resolution.
pub const PLACES: &[(&str, f64, f64)] = &[
    ("札幌", 43.061771, 141.354506),
    ("北海道", 43.066666, 141.35),
    ("青森", 40.822222, 140.7475),
    ("岩手", 39.703611, 141.156389),
    ("宮城", 38.268222, 140.869417),
    ("秋田", 39.716667, 140.1025),
    ("山形", 38.255556, 140.339722),
    ("福島", 37.760833, 140.474722),
    ("長野", 36.648056, 138.194722),
    ("新潟", 37.902222, 139.023611),
    ("富山", 36.695278, 137.211389),
    ("石川", 36.594444, 136.625556),
    ("福井", 36.064722, 136.219444),
    ("群馬", 36.390556, 139.060278),
    ("栃木", 36.565833, 139.883611),
];

/// First table entry whose name appears anywhere in `text`, in table order.
pub fn match_place(text: &str) -> Option<(&'static str, f64, f64)> {
    PLACES
        .iter()
        .copied()
        .find(|&(name, _, _)| text.contains(name))
}
