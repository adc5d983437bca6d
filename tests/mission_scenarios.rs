// tests/mission_scenarios.rs
use glam::IVec2;
use plateau_rover::{
    Direction, Plateau, RoverState, SimulationConfig, SimulationError, parse_mission,
    run_simulation, run_simulation_with,
};

fn error_message(input: &str) -> String {
    run_simulation(input).unwrap_err().to_string()
}

#[test]
fn test_sample_missions() {
    assert_eq!(run_simulation("5 5\n1 2 N\nLMLMLMLMM").unwrap(), "1 3 N");
    assert_eq!(run_simulation("5 5\n3 3 E\nMMRMMRMRRM").unwrap(), "5 1 E");
    assert_eq!(
        run_simulation("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM").unwrap(),
        "1 3 N\n5 1 E"
    );
    assert_eq!(run_simulation("5 5\n0 0 N\nMMRMM").unwrap(), "2 2 E");
}

#[test]
fn test_indented_input() {
    let input = "5 5
                    1 2 N
                    LMLMLMLMM
                    3 3 E
                    MMRMMRMRRM";
    assert_eq!(run_simulation(input).unwrap(), "1 3 N\n5 1 E");
}

#[test]
fn test_extra_whitespace_and_blank_lines() {
    let input = "  5 5  \n      1 2 N  \n      LMLMLMLMM  ";
    assert_eq!(run_simulation(input).unwrap(), "1 3 N");

    let input = "5 5\n\n   1 2 N\n\n\n   LMLMLMLMM\n\n";
    assert_eq!(run_simulation(input).unwrap(), "1 3 N");

    let input = "5 5\r\n1 2 N\r\nLMLMLMLMM\r\n";
    assert_eq!(run_simulation(input).unwrap(), "1 3 N");
}

#[test]
fn test_rovers_are_independent_and_ordered() {
    let input = "5 5\n1 1 N\nMM\n2 2 E\nMM";
    assert_eq!(run_simulation(input).unwrap(), "1 3 N\n4 2 E");

    let input = "5 5\n1 1 N\nM\n2 2 E\nM\n3 3 S\nM";
    assert_eq!(run_simulation(input).unwrap(), "1 2 N\n3 2 E\n3 2 S");

    // Two rovers may end on the same cell; there is no collision handling.
    let input = "5 5\n0 0 N\nM\n0 2 S\nM";
    assert_eq!(run_simulation(input).unwrap(), "0 1 N\n0 1 S");
}

#[test]
fn test_plateau_sizes() {
    assert_eq!(run_simulation("2 2\n0 0 N\nMM").unwrap(), "0 2 N");
    assert_eq!(run_simulation("2 2\n0 0 N\nMMMM").unwrap(), "0 2 N");
    assert_eq!(run_simulation("100 100\n0 0 N\nMMMMM").unwrap(), "0 5 N");
}

#[test]
fn test_plateau_only_yields_empty_report() {
    assert_eq!(run_simulation("5 5").unwrap(), "");
}

#[test]
fn test_negative_plateau_is_accepted() {
    // Nothing is larger than a negative height, so north is always blocked.
    assert_eq!(run_simulation("-1 -1\n0 0 N\nMRM").unwrap(), "0 0 E");
}

#[test]
fn test_missing_plateau() {
    assert_eq!(error_message(""), "Input must contain plateau dimensions");
    assert_eq!(
        error_message("   \n  \n  "),
        "Input must contain plateau dimensions"
    );
    assert_eq!(
        run_simulation("\n\n").unwrap_err(),
        SimulationError::MissingPlateau
    );
}

#[test]
fn test_malformed_rover_block() {
    assert_eq!(
        error_message("5 5\n1 2 N"),
        "Each rover must have position and instruction lines"
    );
    assert_eq!(
        error_message("5 5\n1 2 N\nLMLMLMLMM\n3 3 E"),
        "Each rover must have position and instruction lines"
    );
}

#[test]
fn test_invalid_instruction_aborts_run() {
    assert_eq!(error_message("5 5\n1 2 N\nLMXM"), "Invalid instruction: X");
    assert_eq!(error_message("5 5\n1 2 N\nLMlM"), "Invalid instruction: l");
    assert_eq!(error_message("5 5\n1 2 N\nLM2M"), "Invalid instruction: 2");

    // A bad second rover discards the first rover's result too.
    assert_eq!(
        run_simulation("5 5\n1 2 N\nM\n3 3 E\nMQ").unwrap_err(),
        SimulationError::InvalidInstruction('Q')
    );
}

#[test]
fn test_non_numeric_fields_are_rejected() {
    assert!(matches!(
        run_simulation("five 5\n1 2 N\nM").unwrap_err(),
        SimulationError::InvalidPlateau { .. }
    ));
    assert!(matches!(
        run_simulation("5\n1 2 N\nM").unwrap_err(),
        SimulationError::InvalidPlateau { .. }
    ));
    assert!(matches!(
        run_simulation("5 5\n1 y N\nM").unwrap_err(),
        SimulationError::InvalidPosition { .. }
    ));
    assert!(matches!(
        run_simulation("5 5\n1 2\nM").unwrap_err(),
        SimulationError::InvalidPosition { .. }
    ));
}

#[test]
fn test_extra_tokens_are_rejected() {
    assert_eq!(
        run_simulation("5 5 7\n1 2 N\nM").unwrap_err(),
        SimulationError::InvalidPlateau {
            line: "5 5 7".to_string(),
        }
    );
    assert_eq!(
        run_simulation("5 5\n1 2 N extra\nM").unwrap_err(),
        SimulationError::InvalidPosition {
            line: "1 2 N extra".to_string(),
        }
    );
}

#[test]
fn test_unknown_heading_surfaces_in_rover_turn() {
    assert_eq!(
        run_simulation("5 5\n1 2 Q\nM").unwrap_err(),
        SimulationError::InvalidHeading("Q".to_string())
    );

    // Splitting the input does not look at headings.
    let mission = parse_mission("5 5\n1 1 N\nX\n1 2 Q\nM").unwrap();
    assert_eq!(mission.rovers[1].position, "1 2 Q");

    // The first rover's bad command is reached before the second rover's heading.
    assert_eq!(
        mission.run(&SimulationConfig::default()).unwrap_err(),
        SimulationError::InvalidInstruction('X')
    );
    assert_eq!(
        run_simulation("5 5\n1 1 N\nM\n1 2 Q\nM").unwrap_err(),
        SimulationError::InvalidHeading("Q".to_string())
    );
}

#[test]
fn test_first_error_in_input_order_wins() {
    assert_eq!(
        error_message("5 5\n1 2 N\nX\n1 y N\nM"),
        "Invalid instruction: X"
    );
    assert_eq!(
        run_simulation("5 5\n1 y N\nM\n1 2 N\nX").unwrap_err(),
        SimulationError::InvalidPosition {
            line: "1 y N".to_string(),
        }
    );
}

#[test]
fn test_parse_mission_structure() {
    let mission = parse_mission("5 3\n1 2 N\nLM\n\n0 0 W\nRM\n").unwrap();

    assert_eq!(mission.plateau, Plateau::new(5, 3));
    assert_eq!(mission.rovers.len(), 2);
    assert_eq!(mission.rovers[0].position, "1 2 N");
    assert_eq!(
        mission.rovers[0].start(),
        Ok(RoverState::new(1, 2, Direction::North))
    );
    assert_eq!(mission.rovers[0].instructions, "LM");
    assert_eq!(mission.rovers[1].start().unwrap().position, IVec2::new(0, 0));
    assert_eq!(mission.rovers[1].instructions, "RM");
}

#[test]
fn test_start_validation_is_opt_in() {
    let input = "5 5\n7 2 W\nM";
    assert_eq!(run_simulation(input).unwrap(), "6 2 W");

    let config = SimulationConfig::new().with_validate_start(true);
    assert_eq!(
        run_simulation_with(input, &config).unwrap_err(),
        SimulationError::StartOutOfBounds {
            x: 7,
            y: 2,
            plateau: Plateau::new(5, 5),
        }
    );
    assert_eq!(
        run_simulation_with("5 5\n5 5 N\nM", &config).unwrap(),
        "5 5 N"
    );
}

#[test]
fn test_instruction_limit() {
    let config = SimulationConfig::new().with_max_instructions(3);
    assert_eq!(
        run_simulation_with("5 5\n0 0 N\nMMM", &config).unwrap(),
        "0 3 N"
    );
    assert_eq!(
        run_simulation_with("5 5\n0 0 N\nMMMM", &config).unwrap_err(),
        SimulationError::InstructionLimit { limit: 3, len: 4 }
    );
}

#[test]
fn test_state_json_shape() {
    let mission = parse_mission("5 5\n1 2 N\nLMLMLMLMM").unwrap();
    let finals = mission.run(&SimulationConfig::default()).unwrap();

    let json = serde_json::to_value(&finals).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "position": [1, 3], "heading": "N" }])
    );

    let back: Vec<RoverState> = serde_json::from_value(json).unwrap();
    assert_eq!(back, finals);
}
