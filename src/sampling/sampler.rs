//! Distribution sampling for per-day scheduling decisions
//!
//! Turns the configured shape parameters into concrete draws: how many
//! bookings a resource receives on a day, when each slot starts, and how
//! long it lasts. Every draw is a pure function of the injected random
//! source, so a fixed seed yields a fully reproducible sequence.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::types::{ConfigValidationError, Period, SeederConfig};

/// Samples scheduling decisions from the configured distributions.
///
/// Slot starts are drawn from a separate normal distribution per
/// [`Period`]; daily counts and durations come from bounded uniform
/// ranges. The sampler holds no random state of its own.
#[derive(Debug, Clone)]
pub struct SlotSampler {
    min_daily_bookings: u32,
    max_daily_bookings: u32,
    am_start: Normal<f64>,
    pm_start: Normal<f64>,
    duration_granularity_minutes: i64,
    min_duration_slots: u32,
    max_duration_slots: u32,
}

impl SlotSampler {
    /// Build a sampler from the seeder configuration.
    ///
    /// Fails when a slot-start distribution cannot be constructed from the
    /// configured parameters. A zero standard deviation is legal and pins
    /// every draw to the mean.
    pub fn new(config: &SeederConfig) -> Result<Self, ConfigValidationError> {
        let am_start = Normal::new(config.am_start_mean_hour, config.am_start_std_hours)
            .map_err(|_| ConfigValidationError::InvalidStartDistribution {
                period: "AM".to_string(),
                mean: config.am_start_mean_hour,
                std_dev: config.am_start_std_hours,
            })?;
        let pm_start = Normal::new(config.pm_start_mean_hour, config.pm_start_std_hours)
            .map_err(|_| ConfigValidationError::InvalidStartDistribution {
                period: "PM".to_string(),
                mean: config.pm_start_mean_hour,
                std_dev: config.pm_start_std_hours,
            })?;

        Ok(Self {
            min_daily_bookings: config.min_daily_bookings,
            max_daily_bookings: config.max_daily_bookings,
            am_start,
            pm_start,
            duration_granularity_minutes: config.duration_granularity_minutes,
            min_duration_slots: config.min_duration_slots,
            max_duration_slots: config.max_duration_slots,
        })
    }

    /// Number of bookings a resource receives on a given day
    pub fn sample_daily_booking_count<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min_daily_bookings..=self.max_daily_bookings)
    }

    /// Slot start as `(hour, minute)` for the given period.
    ///
    /// Draws a fractional hour from the period's normal distribution,
    /// clipped to `[0, 24)`; the minute falls out of the fractional part.
    pub fn sample_slot_start<R: Rng + ?Sized>(&self, period: Period, rng: &mut R) -> (u32, u32) {
        let dist = match period {
            Period::Am => &self.am_start,
            Period::Pm => &self.pm_start,
        };
        let fractional_hour: f64 = dist.sample(rng);
        // Clip to the last representable minute of the day
        let clipped = fractional_hour.clamp(0.0, 24.0 - 1.0 / 60.0);
        let hour = clipped.floor() as u32;
        let minute = (((clipped - clipped.floor()) * 60.0).floor() as u32).min(59);
        (hour, minute)
    }

    /// Booking duration in minutes, a bounded multiple of the granularity
    pub fn sample_duration_minutes<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let slots = rng.gen_range(self.min_duration_slots..=self.max_duration_slots);
        i64::from(slots) * self.duration_granularity_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sampler(config: &SeederConfig) -> SlotSampler {
        SlotSampler::new(config).unwrap()
    }

    #[test]
    fn test_daily_count_within_bounds() {
        let config = SeederConfig::default();
        let sampler = sampler(&config);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..500 {
            let n = sampler.sample_daily_booking_count(&mut rng);
            assert!(n <= config.max_daily_bookings);
        }
    }

    #[test]
    fn test_slot_start_clipped_to_valid_ranges() {
        // A huge std dev forces draws outside the day, exercising the clip
        let config = SeederConfig {
            am_start_std_hours: 50.0,
            pm_start_std_hours: 50.0,
            ..Default::default()
        };
        let sampler = sampler(&config);
        let mut rng = StdRng::seed_from_u64(2);

        for period in [Period::Am, Period::Pm] {
            for _ in 0..500 {
                let (hour, minute) = sampler.sample_slot_start(period, &mut rng);
                assert!(hour < 24, "hour {} out of range", hour);
                assert!(minute < 60, "minute {} out of range", minute);
            }
        }
    }

    #[test]
    fn test_zero_std_dev_pins_to_mean() {
        let config = SeederConfig {
            am_start_mean_hour: 10.0,
            am_start_std_hours: 0.0,
            ..Default::default()
        };
        let sampler = sampler(&config);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            assert_eq!(sampler.sample_slot_start(Period::Am, &mut rng), (10, 0));
        }
    }

    #[test]
    fn test_am_draws_earlier_than_pm_on_average() {
        let config = SeederConfig::default();
        let sampler = sampler(&config);
        let mut rng = StdRng::seed_from_u64(4);

        let mean_hour = |period, rng: &mut StdRng| {
            let total: u32 = (0..1000).map(|_| sampler.sample_slot_start(period, rng).0).sum();
            total as f64 / 1000.0
        };

        let am = mean_hour(Period::Am, &mut rng);
        let pm = mean_hour(Period::Pm, &mut rng);
        assert!(am < pm, "expected AM mean {} to fall before PM mean {}", am, pm);
    }

    #[test]
    fn test_duration_is_positive_granularity_multiple() {
        let config = SeederConfig::default();
        let sampler = sampler(&config);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..500 {
            let minutes = sampler.sample_duration_minutes(&mut rng);
            assert!(minutes > 0);
            assert_eq!(minutes % config.duration_granularity_minutes, 0);
            assert!(
                minutes
                    <= i64::from(config.max_duration_slots) * config.duration_granularity_minutes
            );
        }
    }

    #[test]
    fn test_fixed_seed_reproduces_sequence() {
        let config = SeederConfig::default();
        let sampler = sampler(&config);

        let draw = || {
            let mut rng = StdRng::seed_from_u64(6);
            (0..50)
                .map(|i| {
                    (
                        sampler.sample_daily_booking_count(&mut rng),
                        sampler.sample_slot_start(Period::for_slot(i), &mut rng),
                        sampler.sample_duration_minutes(&mut rng),
                    )
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(draw(), draw());
    }
}
