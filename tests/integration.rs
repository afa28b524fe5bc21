use approx::assert_abs_diff_eq;
use satpower::config::loader::LoadedConfig;
use satpower::config::simulation::{SimulationConfig, SimulationParameters};
use satpower::models::summary::RunSummary;
use satpower::output::csv_export::{export_csv, CSV_FILE};
use satpower::output::report::depletion_message;
use satpower::physics::power::is_sunlit;
use satpower::simulation::battery_simulator::{run, BatterySimulator};
use std::fs;

// Full orbital day with the default spacecraft, from configuration text to CSV file
#[test]
fn integration_test() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = LoadedConfig::from_toml_str(
        r#"
        start_epoch = "2024-03-01T23:10:00 UTC"

        [subsystems]
        payload_w = 50.0
        communications_w = 30.0
        on_board_computer_w = 10.0
        attitude_control_w = 20.0
        "#,
    )?;
    assert_eq!(loaded.simulation, SimulationConfig::default());

    let result = BatterySimulator::new(loaded.simulation).run();
    assert!(result.depleted());
    let message = depletion_message(&result).expect("default day runs the battery flat");
    assert!(message.starts_with("Battery depleted after 10."), "{message}");

    let output_dir = tempfile::tempdir()?;
    let path = export_csv(output_dir.path(), &loaded.simulation, &result, loaded.start_epoch)?;
    assert_eq!(path, output_dir.path().join(CSV_FILE));

    let mut reader = csv::Reader::from_path(&path)?;
    let mut rows = 0;
    for record in reader.records() {
        let record = record?;
        let t_s: f64 = record[1].parse()?;
        let charge_wh: f64 = record[4].parse()?;
        assert_eq!(t_s, result.timestamps_s()[rows]);
        assert_eq!(charge_wh, result.charge_wh()[rows]);
        assert_eq!(&record[5], "110");
        assert_eq!(&record[6], "100");
        rows += 1;
    }
    assert_eq!(rows, result.len());

    let text = fs::read_to_string(&path)?;
    assert!(text.lines().nth(1).unwrap().starts_with("2024-03-01T23:10:00"));
    Ok(())
}

#[test]
fn invariants_hold_across_parameter_grid() {
    for step_s in [1.0, 45.0, 60.0, 700.0, 3600.0] {
        for eclipse_fraction in [0.0, 0.35, 0.4, 1.0] {
            for solar_power_w in [0.0, 100.0, 250.0] {
                for initial_charge_wh in [0.0, 10.0, 250.0, 500.0] {
                    let config = SimulationConfig::try_from(SimulationParameters {
                        step_s,
                        eclipse_fraction,
                        solar_power_w,
                        initial_charge_wh,
                        ..SimulationParameters::default()
                    })
                    .unwrap();
                    let result = run(&config);

                    assert_eq!(result.timestamps_s().len(), result.charge_wh().len());
                    assert_eq!(result.timestamps_s()[0], 0.0);
                    assert!(result.timestamps_s().windows(2).all(|w| w[0] < w[1]));
                    assert!(result.len() <= (86_400.0 / step_s).ceil() as usize + 1);
                    assert!(result.charge_wh().iter().all(|&c| c <= 500.0));
                    if result.depleted() {
                        assert!(*result.charge_wh().last().unwrap() <= 0.0);
                        assert_eq!(result.depleted_at_s(), result.timestamps_s().last().copied());
                        assert!(result.charge_wh()[..result.len() - 1].iter().all(|&c| c > 0.0));
                    } else {
                        assert_eq!(result.len(), config.num_steps());
                        assert!(result.charge_wh().iter().all(|&c| c > 0.0));
                    }
                    assert_eq!(result, run(&config));
                }
            }
        }
    }
}

#[test]
fn default_eclipse_boundary() {
    let config = SimulationConfig::default();
    assert!(is_sunlit(3599.0, config.orbit_period_s(), config.eclipse_fraction()));
    assert!(!is_sunlit(3600.0, config.orbit_period_s(), config.eclipse_fraction()));
}

#[test]
fn surplus_day_keeps_battery_topped_up() {
    let config = SimulationConfig::try_from(SimulationParameters {
        solar_power_w: 300.0,
        ..SimulationParameters::default()
    })
    .unwrap();
    let result = run(&config);
    let summary = RunSummary::new(&config, &result);

    assert!(!result.depleted());
    assert_abs_diff_eq!(summary.max_charge_wh, 500.0);
    // Deepest point is the end of an eclipse: 2400 s at 110 W.
    assert_abs_diff_eq!(summary.min_charge_wh, 500.0 - 110.0 * 2400.0 / 3600.0, epsilon = 1e-6);
}
