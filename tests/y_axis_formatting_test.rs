// tests/y_axis_formatting_test.rs

use collider_timeline::plot_framework::format_energy_tick;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decade_ticks_on_log_axis() {
        assert_eq!(format_energy_tick(10.0), "10");
        assert_eq!(format_energy_tick(100.0), "100");
        assert_eq!(format_energy_tick(1000.0), "1k");
        assert_eq!(format_energy_tick(10_000.0), "10k");
        assert_eq!(format_energy_tick(100_000.0), "100k");
    }

    #[test]
    fn test_small_values_keep_decimals() {
        assert_eq!(format_energy_tick(0.5), "0.5");
        assert_eq!(format_energy_tick(2.5), "2.5");
        // Integer values below 10 print without a fraction
        assert_eq!(format_energy_tick(1.0), "1");
        assert_eq!(format_energy_tick(0.0), "0");
    }

    #[test]
    fn test_large_values_use_suffixes() {
        assert_eq!(format_energy_tick(5000.0), "5k");
        assert_eq!(format_energy_tick(12500.0), "12k"); // 12.5 formatted with {:.0}
        assert_eq!(format_energy_tick(1_000_000.0), "1.0M");
        assert_eq!(format_energy_tick(2_500_000.0), "2.5M");
        // Livingston energies of hadron colliders reach the GeV-billions
        assert_eq!(format_energy_tick(5_000_000_000.0), "5.0G");
    }

    #[test]
    fn test_negative_linear_axis_values() {
        assert_eq!(format_energy_tick(-250.0), "-250");
        assert_eq!(format_energy_tick(-2000.0), "-2k");
    }
}
