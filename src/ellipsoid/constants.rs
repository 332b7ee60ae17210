/// Built in ellipsoids: name, semimajor axis, reciproque flattening.
/// Following the EPSG convention, a zero reciproque flattening
/// indicates zero flattening.
#[rustfmt::skip]
pub(crate) const ELLIPSOID_LIST: [(&str, f64, f64); 11] = [
    ("WGS84",    6_378_137.0,   298.257_223_563),
    ("GRS80",    6_378_137.0,   298.257_222_100_882_7),
    ("WGS72",    6_378_135.0,   298.26),
    ("intl",     6_378_388.0,   297.0),
    ("Helmert",  6_378_200.0,   298.3),
    ("krass",    6_378_245.0,   298.3),
    ("clrk66",   6_378_206.4,   294.978_698_2),
    ("clrk80",   6_378_249.145, 293.465),
    ("bessel",   6_377_397.155, 299.152_812_8),
    ("airy",     6_377_563.396, 299.324_964_6),
    ("mod_airy", 6_377_340.189, 299.324_964_6),
];
