use super::Config;

/// The golden ratio: φ = (1 + √5) / 2.
pub(super) const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ.
///
/// This equals φ - 1 due to the golden ratio's unique property.
pub(super) const INV_PHI: f64 = PHI - 1.0;

/// Guard against a degenerate parabolic-fit denominator.
const TINY: f64 = 1e-21;

/// A downhill triple: `b` lies between `a` and `c` with
/// f(b) ≤ f(a) and f(b) ≤ f(c), so a minimum is trapped inside.
#[derive(Debug, Clone, Copy)]
pub(super) struct Downhill {
    pub(super) a: f64,
    pub(super) b: f64,
    pub(super) c: f64,

    /// The objective at `b`, the best point seen while bracketing.
    pub(super) fb: f64,
}

/// Why bracket expansion gave up.
#[derive(Debug)]
pub(super) enum ExpandError<E> {
    /// Evaluating the objective failed.
    Eval(E),

    /// An abscissa or objective value left the finite range.
    NonFinite { x: f64 },

    /// The expansion budget ran out before the objective rose again.
    Budget { expansions: usize },
}

/// Grows a downhill bracket from two starting abscissae.
///
/// Walks downhill from `xa0`/`xb0`, growing the interval by the golden
/// ratio and jumping ahead by parabolic extrapolation where the fit looks
/// trustworthy, capped at `grow_limit` interval widths per step. Expansion
/// stops as soon as the objective rises again.
pub(super) fn expand<F, E>(
    mut phi: F,
    xa0: f64,
    xb0: f64,
    config: &Config,
) -> Result<Downhill, ExpandError<E>>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let mut xa = xa0;
    let mut xb = xb0;
    let mut fa = eval(&mut phi, xa)?;
    let mut fb = eval(&mut phi, xb)?;

    // Orient the walk so it goes downhill from a to b.
    if fa < fb {
        std::mem::swap(&mut xa, &mut xb);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut xc = xb + PHI * (xb - xa);
    let mut fc = eval(&mut phi, xc)?;

    let mut expansions = 0;
    while fc < fb {
        if expansions >= config.max_expansions() {
            return Err(ExpandError::Budget { expansions });
        }
        expansions += 1;

        // Parabola through (a, b, c); its vertex is the trial point.
        let tmp1 = (xb - xa) * (fb - fc);
        let tmp2 = (xb - xc) * (fb - fa);
        let val = tmp2 - tmp1;
        let denom = if val.abs() < TINY { 2.0 * TINY } else { 2.0 * val };
        let mut w = xb - ((xb - xc) * tmp2 - (xb - xa) * tmp1) / denom;
        let wlim = xb + config.grow_limit() * (xc - xb);
        let mut fw;

        if (w - xc) * (xb - w) > 0.0 {
            // The vertex lies between b and c.
            fw = eval(&mut phi, w)?;
            if fw < fc {
                return Ok(Downhill {
                    a: xb,
                    b: w,
                    c: xc,
                    fb: fw,
                });
            } else if fw > fb {
                return Ok(Downhill { a: xa, b: xb, c: w, fb });
            }
            // The parabola was misleading; fall back to golden growth.
            w = xc + PHI * (xc - xb);
            fw = eval(&mut phi, w)?;
        } else if (w - wlim) * (wlim - xc) >= 0.0 {
            // The vertex overshoots the growth limit; clamp to it.
            w = wlim;
            fw = eval(&mut phi, w)?;
        } else if (w - wlim) * (xc - w) > 0.0 {
            // The vertex lies between c and the growth limit.
            fw = eval(&mut phi, w)?;
            if fw < fc {
                xb = xc;
                xc = w;
                w = xc + PHI * (xc - xb);
                fb = fc;
                fc = fw;
                fw = eval(&mut phi, w)?;
            }
        } else {
            w = xc + PHI * (xc - xb);
            fw = eval(&mut phi, w)?;
        }

        xa = xb;
        xb = xc;
        xc = w;
        fa = fb;
        fb = fc;
        fc = fw;
    }

    Ok(Downhill { a: xa, b: xb, c: xc, fb })
}

fn eval<F, E>(phi: &mut F, x: f64) -> Result<f64, ExpandError<E>>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    if !x.is_finite() {
        return Err(ExpandError::NonFinite { x });
    }
    let fx = phi(x).map_err(ExpandError::Eval)?;
    if !fx.is_finite() {
        return Err(ExpandError::NonFinite { x });
    }
    Ok(fx)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    fn quadratic(center: f64) -> impl FnMut(f64) -> Result<f64, Infallible> {
        move |x| Ok((x - center).powi(2))
    }

    fn is_downhill<F>(triple: &Downhill, mut phi: F) -> bool
    where
        F: FnMut(f64) -> Result<f64, Infallible>,
    {
        let Downhill { a, b, c, .. } = *triple;
        let (fa, fb, fc) = (phi(a).unwrap(), phi(b).unwrap(), phi(c).unwrap());
        let between = (a < b && b < c) || (c < b && b < a);
        between && fb <= fa && fb <= fc
    }

    #[test]
    fn expands_right_toward_a_distant_minimum() {
        let triple = expand(quadratic(5.0), 0.0, 1.0, &Config::default()).unwrap();

        assert!(is_downhill(&triple, quadratic(5.0)));
        assert!(triple.a.min(triple.c) < 5.0 && 5.0 < triple.a.max(triple.c));
    }

    #[test]
    fn reverses_direction_when_uphill() {
        // f decreases toward -3, so the walk must turn around.
        let triple = expand(quadratic(-3.0), 0.0, 1.0, &Config::default()).unwrap();

        assert!(is_downhill(&triple, quadratic(-3.0)));
        assert!(triple.a.min(triple.c) < -3.0 && -3.0 < triple.a.max(triple.c));
    }

    #[test]
    fn budget_exhaustion_is_an_error() {
        let config = Config::default().with_expansion(110.0, 8).unwrap();
        let result = expand(|x| Ok::<_, Infallible>(-x), 0.0, 1.0, &config);

        assert!(matches!(result, Err(ExpandError::Budget { expansions: 8 })));
    }

    #[test]
    fn non_finite_objective_is_an_error() {
        let result = expand(
            |x| Ok::<_, Infallible>(if x > 2.0 { f64::NAN } else { -x }),
            0.0,
            1.0,
            &Config::default(),
        );

        assert!(matches!(result, Err(ExpandError::NonFinite { .. })));
    }
}
