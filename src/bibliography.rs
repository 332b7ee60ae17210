/// Some literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// T. Vincenty (1975) Direct and Inverse Solutions of Geodesics on the Ellipsoid
    /// with application of nested equations.
    /// Survey Review, 23(176): 88-93.
    /// [pdf](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf)
    /// (See also Wikipedia: [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty's_formulae)).
    Vin75,

    /// T. Vincenty (1976). Correspondence. Survey Review. 23(180): 294.
    Vin76,

    /// Charles F.F. Karney (2012) Algorithms for geodesics.
    /// [pdf](https://arxiv.org/pdf/1109.4448.pdf)
    Kar12,

    /// Charles F.F. Karney (2013) Algorithms for geodesics. Journal of Geodesy 87, 43–55.
    /// [DOI](https://doi.org/10.1007/s00190-012-0578-z)
    Kar13,

    /// Chris Veness (2002-2019): *Vincenty solutions of geodesics on the ellipsoid*.
    /// [Movable Type Scripts](https://www.movable-type.co.uk/scripts/latlong-vincenty.html)
    Ven19,

    /// Dan Pilone (2014): *Determining if a spherical polygon contains a pole*.
    /// [Element 84 blog](https://www.element84.com/blog/determining-if-a-spherical-polygon-contains-a-pole)
    Pil14,

    /// R.H. Rapp (1991): *Geometric Geodesy, Part I*.
    /// Ohio State University, Department of Geodetic Science and Surveying.
    /// [hdl](http://hdl.handle.net/1811/24333)
    Rap91,
}
