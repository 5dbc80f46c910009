// Host-side tests for the typewriter and the scripted terminal.

use folio_fx::core::constants::*;
use folio_fx::core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn typewriter_types_holds_deletes_and_advances() {
    let mut tw = Typewriter::new(&["abc", "xy"]);

    let s = tw.tick();
    assert_eq!(
        s,
        TypeStep {
            text: "a".into(),
            delay_ms: TYPE_CHAR_DELAY_MS
        }
    );
    assert_eq!(tw.tick().text, "ab");

    let full = tw.tick();
    assert_eq!(full.text, "abc");
    assert_eq!(full.delay_ms, TYPE_HOLD_DELAY_MS);
    assert!(tw.is_deleting());

    let d = tw.tick();
    assert_eq!(
        d,
        TypeStep {
            text: "ab".into(),
            delay_ms: TYPE_DELETE_DELAY_MS
        }
    );
    assert_eq!(tw.tick().text, "a");

    let empty = tw.tick();
    assert_eq!(empty.text, "");
    assert_eq!(empty.delay_ms, TYPE_NEXT_ROLE_DELAY_MS);
    assert_eq!(tw.role_index(), 1);
    assert!(!tw.is_deleting());

    assert_eq!(tw.tick().text, "x");
}

#[test]
fn typewriter_wraps_to_first_role() {
    let mut tw = Typewriter::new(&["a"]);
    assert_eq!(tw.tick().text, "a");
    assert_eq!(tw.tick().text, "");
    assert_eq!(tw.role_index(), 0);
    assert_eq!(tw.tick().text, "a");
}

#[test]
fn typewriter_cycles_default_roles() {
    let mut tw = Typewriter::default();
    let first = DEFAULT_ROLES[0];
    let mut last = String::new();
    for _ in 0..first.len() {
        last = tw.tick().text;
    }
    assert_eq!(last, first);
}

#[test]
fn typewriter_without_roles_is_inert() {
    let mut tw = Typewriter::new(&[]);
    let s = tw.tick();
    assert_eq!(s.text, "");
}

static TINY: &[TerminalCommand] = &[
    TerminalCommand {
        cmd: "ls",
        output: &["a", "b"],
    },
    TerminalCommand {
        cmd: "w",
        output: &["root"],
    },
];

#[test]
fn terminal_runs_script_in_order() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut script = TerminalScript::new(TINY);
    let actions: Vec<TerminalAction> = (0..11)
        .map(|_| script.next_step(&mut rng).unwrap().action)
        .collect();
    assert_eq!(
        actions,
        vec![
            TerminalAction::TypeChar('l'),
            TerminalAction::TypeChar('s'),
            TerminalAction::OutputLine("a"),
            TerminalAction::OutputLine("b"),
            TerminalAction::NewPrompt,
            TerminalAction::TypeChar('w'),
            TerminalAction::OutputLine("root"),
            TerminalAction::NewPrompt,
            TerminalAction::Clear,
            TerminalAction::TypeChar('l'),
            TerminalAction::TypeChar('s'),
        ]
    );
}

#[test]
fn terminal_delays_follow_the_script_timing() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut script = TerminalScript::new(TINY);
    let delays: Vec<u32> = (0..9)
        .map(|_| script.next_step(&mut rng).unwrap().delay_ms)
        .collect();

    let key = TERMINAL_KEY_DELAY_MIN_MS..TERMINAL_KEY_DELAY_MAX_MS;
    assert!(key.contains(&delays[0]));
    let last_key = delays[1] - TERMINAL_OUTPUT_PAUSE_MS;
    assert!(key.contains(&last_key));
    assert_eq!(delays[2], TERMINAL_LINE_DELAY_MS);
    assert_eq!(delays[3], TERMINAL_LINE_DELAY_MS);
    assert_eq!(delays[4], TERMINAL_NEXT_COMMAND_DELAY_MS);
    assert_eq!(
        delays[7],
        TERMINAL_NEXT_COMMAND_DELAY_MS + TERMINAL_RESTART_DELAY_MS
    );
    assert_eq!(delays[8], 0);
}

#[test]
fn terminal_default_session_has_three_commands() {
    let script = TerminalScript::default();
    assert_eq!(script.commands().len(), 3);
    assert_eq!(script.commands()[1].cmd, "kubectl get nodes");
    assert!(script.commands().iter().all(|c| c.output.len() == 4));
}

#[test]
fn terminal_skips_empty_commands_and_outputs() {
    static ODD: &[TerminalCommand] = &[TerminalCommand {
        cmd: "",
        output: &[],
    }];
    let mut rng = StdRng::seed_from_u64(0);
    let mut script = TerminalScript::new(ODD);
    assert_eq!(
        script.next_step(&mut rng).unwrap().action,
        TerminalAction::Pause
    );
    assert_eq!(
        script.next_step(&mut rng).unwrap().action,
        TerminalAction::NewPrompt
    );
    assert_eq!(
        script.next_step(&mut rng).unwrap().action,
        TerminalAction::Clear
    );
}

#[test]
fn empty_command_still_pauses_before_output() {
    static SILENT: &[TerminalCommand] = &[TerminalCommand {
        cmd: "",
        output: &["x"],
    }];
    let mut rng = StdRng::seed_from_u64(0);
    let mut script = TerminalScript::new(SILENT);
    let pause = script.next_step(&mut rng).unwrap();
    assert_eq!(
        pause,
        TerminalStep {
            action: TerminalAction::Pause,
            delay_ms: TERMINAL_OUTPUT_PAUSE_MS,
        }
    );
    let line = script.next_step(&mut rng).unwrap();
    assert_eq!(line.action, TerminalAction::OutputLine("x"));
    assert_eq!(line.delay_ms, TERMINAL_LINE_DELAY_MS);
}

#[test]
fn empty_script_yields_nothing() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut script = TerminalScript::new(&[]);
    assert!(script.next_step(&mut rng).is_none());
}
