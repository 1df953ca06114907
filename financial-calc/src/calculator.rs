//! Decimal time-value-of-money calculations

use crate::{Error, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Newton-Raphson iteration budget for IRR
const MAX_IRR_ITERATIONS: u32 = 100;

/// Financial calculator
///
/// Stateless; every operation is a pure function over `Decimal` inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinancialCalculator;

impl FinancialCalculator {
    /// Create new calculator
    pub fn new() -> Self {
        Self
    }

    /// Compound interest earned on `principal` over `periods` years
    ///
    /// `interest = principal * (1 + rate/frequency)^(frequency*periods) - principal`,
    /// quantized to 2 decimal places half-up. Pass `frequency = 1` for annual
    /// compounding, `12` for monthly.
    pub fn compound_interest(
        &self,
        principal: Decimal,
        annual_rate: Decimal,
        periods: i64,
        frequency: u32,
    ) -> Result<Decimal> {
        if periods < 0 {
            return Err(Error::InvalidInput(format!(
                "negative time periods: {periods}"
            )));
        }
        if frequency == 0 {
            return Err(Error::InvalidInput(
                "compound frequency must be positive".to_string(),
            ));
        }

        let rate_per_period = annual_rate
            .checked_div(Decimal::from(frequency))
            .ok_or(Error::Overflow("rate per period"))?;
        let base = Decimal::ONE
            .checked_add(rate_per_period)
            .ok_or(Error::Overflow("growth base"))?;
        let exponent = (frequency as u64)
            .checked_mul(periods as u64)
            .ok_or(Error::Overflow("compounding exponent"))?;

        let growth = checked_pow(base, exponent)?;
        let gross = principal
            .checked_mul(growth)
            .ok_or(Error::Overflow("gross value"))?;
        let interest = gross
            .checked_sub(principal)
            .ok_or(Error::Overflow("interest"))?;

        Ok(quantize_currency(interest))
    }

    /// Present value of `future_value` received after `periods` years
    ///
    /// `pv = future_value / (1 + discount_rate)^periods`, quantized to
    /// 2 decimal places half-up.
    pub fn present_value(
        &self,
        future_value: Decimal,
        discount_rate: Decimal,
        periods: i64,
    ) -> Result<Decimal> {
        if periods < 0 {
            return Err(Error::InvalidInput(format!(
                "negative time periods: {periods}"
            )));
        }

        let base = Decimal::ONE
            .checked_add(discount_rate)
            .ok_or(Error::Overflow("discount base"))?;
        let discount = checked_pow(base, periods as u64)?;
        let present = future_value
            .checked_div(discount)
            .ok_or_else(|| Error::InvalidInput("discount factor is zero".to_string()))?;

        Ok(quantize_currency(present))
    }

    /// Net present value of an ordered cash-flow sequence
    ///
    /// Each flow is discounted by its zero-indexed position; the flow at
    /// index 0 is undiscounted. Result quantized to 2 decimal places half-up.
    pub fn net_present_value(
        &self,
        cash_flows: &[Decimal],
        discount_rate: Decimal,
    ) -> Result<Decimal> {
        let base = Decimal::ONE
            .checked_add(discount_rate)
            .ok_or(Error::Overflow("discount base"))?;

        let mut npv = Decimal::ZERO;
        let mut discount = Decimal::ONE;
        for (period, flow) in cash_flows.iter().enumerate() {
            if period > 0 {
                discount = discount
                    .checked_mul(base)
                    .ok_or(Error::Overflow("discount factor"))?;
            }
            let term = flow
                .checked_div(discount)
                .ok_or_else(|| Error::InvalidInput("discount factor is zero".to_string()))?;
            npv = npv.checked_add(term).ok_or(Error::Overflow("npv sum"))?;
        }

        Ok(quantize_currency(npv))
    }

    /// Internal rate of return via Newton-Raphson
    ///
    /// Iterates until |NPV| < 0.0001 or the 100-iteration budget is spent.
    /// `0.1` is a reasonable `initial_guess` for typical investment flows.
    /// Result quantized to 4 decimal places half-up.
    pub fn internal_rate_of_return(
        &self,
        cash_flows: &[Decimal],
        initial_guess: Decimal,
    ) -> Result<Decimal> {
        if cash_flows.is_empty() {
            return Err(Error::InvalidInput("no cash flows".to_string()));
        }

        let tolerance = Decimal::new(1, 4); // 0.0001
        let mut rate = initial_guess;

        for _ in 0..MAX_IRR_ITERATIONS {
            let (npv, derivative) = npv_with_derivative(cash_flows, rate)?;

            if npv.abs() < tolerance {
                return Ok(rate.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero));
            }
            if derivative.is_zero() {
                return Err(Error::Convergence(
                    "derivative reached zero mid-iteration".to_string(),
                ));
            }

            let step = npv
                .checked_div(derivative)
                .ok_or_else(|| Error::Convergence("unstable Newton step".to_string()))?;
            rate = rate
                .checked_sub(step)
                .ok_or_else(|| Error::Convergence("rate diverged".to_string()))?;
        }

        Err(Error::Convergence(format!(
            "no convergence within {MAX_IRR_ITERATIONS} iterations"
        )))
    }
}

/// NPV and its first derivative with respect to the rate, unquantized
fn npv_with_derivative(cash_flows: &[Decimal], rate: Decimal) -> Result<(Decimal, Decimal)> {
    let base = Decimal::ONE
        .checked_add(rate)
        .ok_or(Error::Overflow("discount base"))?;
    if base.is_zero() {
        return Err(Error::Convergence("rate reached -1".to_string()));
    }

    let mut npv = Decimal::ZERO;
    let mut derivative = Decimal::ZERO;
    let mut discount = Decimal::ONE; // (1 + rate)^period
    for (period, flow) in cash_flows.iter().enumerate() {
        if period > 0 {
            discount = discount
                .checked_mul(base)
                .ok_or(Error::Overflow("discount factor"))?;

            // d/dr [cf * (1+r)^-n] = -n * cf * (1+r)^-(n+1)
            let next = discount
                .checked_mul(base)
                .ok_or(Error::Overflow("derivative factor"))?;
            let term = Decimal::from(period as u64)
                .checked_mul(*flow)
                .and_then(|t| t.checked_div(next))
                .ok_or(Error::Overflow("derivative term"))?;
            derivative = derivative
                .checked_sub(term)
                .ok_or(Error::Overflow("derivative sum"))?;
        }

        let term = flow
            .checked_div(discount)
            .ok_or(Error::Overflow("npv term"))?;
        npv = npv.checked_add(term).ok_or(Error::Overflow("npv sum"))?;
    }

    Ok((npv, derivative))
}

/// Integer power by squaring over checked multiplication
fn checked_pow(base: Decimal, mut exponent: u64) -> Result<Decimal> {
    let mut result = Decimal::ONE;
    let mut factor = base;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result
                .checked_mul(factor)
                .ok_or(Error::Overflow("integer power"))?;
        }
        exponent >>= 1;
        if exponent > 0 {
            factor = factor
                .checked_mul(factor)
                .ok_or(Error::Overflow("integer power"))?;
        }
    }
    Ok(result)
}

/// 2-decimal-place half-up currency quantization
fn quantize_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_compound_interest_annual() {
        let calc = FinancialCalculator::new();
        let interest = calc
            .compound_interest(
                Decimal::from(1_000),
                Decimal::from_str("0.05").unwrap(),
                10,
                1,
            )
            .unwrap();

        // 1000 * (1.05^10 - 1) = 628.894626...
        assert_eq!(interest, Decimal::from_str("628.89").unwrap());
    }

    #[test]
    fn test_compound_interest_monthly() {
        let calc = FinancialCalculator::new();
        let interest = calc
            .compound_interest(
                Decimal::from(1_000),
                Decimal::from_str("0.12").unwrap(),
                1,
                12,
            )
            .unwrap();

        // 1000 * (1.01^12 - 1) = 126.825030...
        assert_eq!(interest, Decimal::from_str("126.83").unwrap());
    }

    #[test]
    fn test_compound_interest_rejects_negative_periods() {
        let calc = FinancialCalculator::new();
        let result = calc.compound_interest(
            Decimal::from(1_000),
            Decimal::from_str("0.05").unwrap(),
            -1,
            1,
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_compound_interest_rejects_zero_frequency() {
        let calc = FinancialCalculator::new();
        let result = calc.compound_interest(
            Decimal::from(1_000),
            Decimal::from_str("0.05").unwrap(),
            10,
            0,
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_present_value() {
        let calc = FinancialCalculator::new();
        let present = calc
            .present_value(Decimal::from(1_100), Decimal::from_str("0.1").unwrap(), 1)
            .unwrap();

        assert_eq!(present, Decimal::from(1_000));
    }

    #[test]
    fn test_present_value_inverts_compounding() {
        let calc = FinancialCalculator::new();
        let principal = Decimal::from(2_500);
        let rate = Decimal::from_str("0.07").unwrap();

        let interest = calc.compound_interest(principal, rate, 5, 1).unwrap();
        let recovered = calc.present_value(principal + interest, rate, 5).unwrap();

        let drift = (recovered - principal).abs();
        assert!(drift <= Decimal::from_str("0.02").unwrap(), "drift: {drift}");
    }

    #[test]
    fn test_net_present_value() {
        let calc = FinancialCalculator::new();
        let flows = vec![
            Decimal::from(-1_000),
            Decimal::from(500),
            Decimal::from(500),
            Decimal::from(500),
        ];
        let npv = calc
            .net_present_value(&flows, Decimal::from_str("0.1").unwrap())
            .unwrap();

        // -1000 + 500/1.1 + 500/1.21 + 500/1.331 = 243.425995...
        assert_eq!(npv, Decimal::from_str("243.43").unwrap());
    }

    #[test]
    fn test_net_present_value_first_flow_undiscounted() {
        let calc = FinancialCalculator::new();
        let flows = vec![Decimal::from(750)];
        let npv = calc
            .net_present_value(&flows, Decimal::from_str("0.25").unwrap())
            .unwrap();

        assert_eq!(npv, Decimal::from(750));
    }

    #[test]
    fn test_irr_exact_root() {
        let calc = FinancialCalculator::new();
        let flows = vec![Decimal::from(-100), Decimal::from(110)];

        // NPV is exactly zero at 10%
        let rate = calc
            .internal_rate_of_return(&flows, Decimal::from_str("0.1").unwrap())
            .unwrap();
        assert_eq!(rate, Decimal::from_str("0.1000").unwrap());
    }

    #[test]
    fn test_irr_converges_from_default_guess() {
        let calc = FinancialCalculator::new();
        let flows = vec![
            Decimal::from(-1_000),
            Decimal::from(500),
            Decimal::from(500),
            Decimal::from(500),
        ];
        let rate = calc
            .internal_rate_of_return(&flows, Decimal::from_str("0.1").unwrap())
            .unwrap();

        // Root lies between 23% and 24%
        assert!(rate > Decimal::from_str("0.23").unwrap());
        assert!(rate < Decimal::from_str("0.24").unwrap());
    }

    #[test]
    fn test_irr_zero_derivative_is_convergence_error() {
        let calc = FinancialCalculator::new();

        // Single negative flow: NPV is constant, derivative is zero
        let flows = vec![Decimal::from(-100)];
        let result = calc.internal_rate_of_return(&flows, Decimal::from_str("0.1").unwrap());
        assert!(matches!(result, Err(Error::Convergence(_))));
    }

    #[test]
    fn test_irr_rejects_empty_flows() {
        let calc = FinancialCalculator::new();
        let result = calc.internal_rate_of_return(&[], Decimal::from_str("0.1").unwrap());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
