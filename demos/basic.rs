use complex_special::*;
use num_complex::Complex64;

fn main() {
    let z = Complex64::new(1.0, 2.0);

    // -- Primitive arithmetic --
    println!("=== Arithmetic ===");
    let w = Complex64::new(3.0, -4.0);
    println!("{z} + {w} = {}", add(z, w));
    println!("{z} / {w} = {}", div(z, w));
    println!("sqrt(-4) = {}", sqrt(Complex64::new(-4.0, 0.0)));
    println!("cbrt(-8) = {} (real branch)", cbrt(Complex64::new(-8.0, 0.0)));
    println!(
        "cbrt(-8) = {} (principal branch)",
        cbrt_with(Complex64::new(-8.0, 0.0), CbrtBranch::Principal)
    );

    // -- Extreme magnitudes --
    println!("\n=== Overflow-safe primitives ===");
    let huge = Complex64::new(1e308, 1e308);
    println!("abs({huge}) = {}", abs(huge));
    println!("inv({huge}) = {}", inv(huge));
    println!("exp(710 + i) = {}", exp(Complex64::new(710.0, 1.0)));

    // -- Elementary functions --
    println!("\n=== Elementary functions ===");
    println!("ln({z}) = {}", ln(z));
    println!("{z}^{w} = {}", powc(z, w));
    println!("asinh({z}) = {}", asinh(z));
    println!("gd({z}) = {}", gd(z));

    // -- Gamma family --
    println!("\n=== Gamma family ===");
    println!("Gamma({z}) = {}", gamma(z));
    println!("lnGamma({z}) = {}", loggamma(z));
    println!("psi({z}) = {}", digamma(z));
    println!("psi''({z}) = {}", polygamma(2, z));
    let pole = gamma(Complex64::new(-2.0, 0.0));
    println!("Gamma(-2) = {pole} -> {:?}", finite_or_err(pole));

    // -- Error functions --
    println!("\n=== Error functions ===");
    println!("erf({z}) = {}", z.erf());
    println!("erfc({z}) = {}", z.erfc());
    println!("erfcx(200) = {}", erfcx(Complex64::new(200.0, 0.0)));
    println!("C({z}) = {}, S({z}) = {}", z.fresnel_c(), z.fresnel_s());

    // -- Sum of logarithms --
    println!("\n=== Log-sum ===");
    let factors: Vec<Complex64> = (1..=4).map(|k| Complex64::new(-1.0, f64::from(k))).collect();
    println!("sum ln = {}", log_sum(&factors));
    println!("winding offset = {}", log_offset(&factors));
}
