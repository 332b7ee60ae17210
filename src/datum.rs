use crate::Ellipsoid;
use crate::Error;
use log::info;
use log::warn;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// A geodetic datum: A reference frame identity, bound to the
/// ellipsoid its coordinates refer to.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    name: String,
    ellipsoid: Ellipsoid,
}

impl Datum {
    /// A user defined datum
    #[must_use]
    pub fn new(name: &str, ellipsoid: Ellipsoid) -> Datum {
        Datum {
            name: name.to_string(),
            ellipsoid,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// The names of the built in datums, in alphabetical order
    pub fn registry() -> impl Iterator<Item = &'static str> {
        REGISTRY.keys().copied()
    }
}

/// Look up one of the built in datums by name.
pub fn datum(name: &str) -> Result<&'static Datum, Error> {
    REGISTRY
        .get(name)
        .ok_or_else(|| Error::NotFound(format!("datum {name}")))
}

// Datum name, ellipsoid name
const DATUM_LIST: [(&str, &str); 12] = [
    ("WGS84", "WGS84"),
    ("WGS72", "WGS72"),
    ("NAD83", "GRS80"),
    ("ETRS89", "GRS80"),
    ("GDA94", "GRS80"),
    ("NAD27", "clrk66"),
    ("ED50", "intl"),
    ("OSGB36", "airy"),
    ("Irl1975", "mod_airy"),
    ("TokyoJapan", "bessel"),
    ("Pulkovo1942", "krass"),
    ("Helmert1906", "Helmert"),
];

static REGISTRY: Lazy<BTreeMap<&'static str, Datum>> = Lazy::new(|| {
    let mut registry = BTreeMap::new();
    for (name, ellps) in DATUM_LIST {
        match Ellipsoid::named(ellps) {
            Ok(ellipsoid) => {
                registry.insert(name, Datum::new(name, ellipsoid));
            }
            Err(e) => warn!("Datum {name} skipped: {e}"),
        }
    }
    info!("Datum registry built with {} entries", registry.len());
    registry
});

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() -> Result<(), Error> {
        let wgs84 = datum("WGS84")?;
        assert_eq!(wgs84.name(), "WGS84");
        assert_eq!(*wgs84.ellipsoid(), Ellipsoid::default());

        let osgb36 = datum("OSGB36")?;
        assert_eq!(osgb36.ellipsoid().semimajor_axis(), 6_377_563.396);

        // NAD83 and ETRS89 share the GRS80 ellipsoid
        let nad83 = datum("NAD83")?;
        let etrs89 = datum("ETRS89")?;
        assert_eq!(nad83.ellipsoid(), etrs89.ellipsoid());
        assert!(!nad83.ellipsoid().is_compatible_with(wgs84.ellipsoid()));

        assert!(matches!(datum("Atlantis"), Err(Error::NotFound(_))));
        Ok(())
    }

    #[test]
    fn registry() -> Result<(), Error> {
        let names: Vec<_> = Datum::registry().collect();
        assert_eq!(names.len(), DATUM_LIST.len());
        assert!(names.contains(&"ED50"));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        for name in names {
            assert_eq!(datum(name)?.name(), name);
        }

        // Lookups hand out the same static instance every time
        assert!(std::ptr::eq(datum("WGS84")?, datum("WGS84")?));

        let mine = Datum::new("Mine", Ellipsoid::named("intl")?);
        assert_eq!(mine.ellipsoid(), datum("ED50")?.ellipsoid());
        assert!(Datum::registry().all(|name| name != "Mine"));
        Ok(())
    }
}
