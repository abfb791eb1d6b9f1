use tab::Opt;
use tabsat::input::Input;
use tabsat::report::{classified, decide, decided, process};

#[test]
fn classify_lines() {
    assert_eq!(classified("(p/\\q"), "(p/\\q is not a formula.");
    assert_eq!(classified("P(x,y)"), "P(x,y) is an atom.");
    assert_eq!(
        classified("~AxP(x,x)"),
        "~AxP(x,x) is a negation of a first order logic formula."
    );
    assert_eq!(
        classified("(AxP(x,x)\\/Q(y,z))"),
        "(AxP(x,x)\\/Q(y,z)) is a binary connective first order formula. \
         Its left hand side is AxP(x,x), its connective is \\/, and its right hand side is Q(y,z)."
    );
}

#[test]
fn sat_lines() {
    let opt = Opt::default();
    let line = |s: &str| decided(s, decide(s, &opt).map(|(v, _)| v));
    assert_eq!(line("(p/\\~p)"), "(p/\\~p) is not satisfiable.");
    assert_eq!(line("ExP(x,x)"), "ExP(x,x) is satisfiable.");
    assert_eq!(line("p/\\q"), "p/\\q is not a formula.");

    let deep = "Ex".repeat(3) + "P(x,x)";
    let opt = Opt { constants: 2 };
    let (verdict, stats) = decide(&deep, &opt).unwrap();
    assert_eq!(
        decided(&deep, Some(verdict)),
        "ExExExP(x,x) may or may not be satisfiable."
    );
    assert_eq!(stats.constants, 2);
}

#[test]
fn both_modes() {
    let input = Input::from_text("PARSE SAT\nq\n(q\n").unwrap();
    let (lines, stats) = process(&input, &Opt::default());
    let expected = [
        "q is a proposition.",
        "q is satisfiable.",
        "(q is not a formula.",
        "(q is not a formula.",
    ];
    assert_eq!(lines, expected);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0]["formula"], "q");
    assert_eq!(stats[0]["verdict"], 1);
}

#[test]
fn no_mode() {
    let input = Input::from_text("nothing to do\np\n").unwrap();
    let (lines, stats) = process(&input, &Opt::default());
    assert!(lines.is_empty() && stats.is_empty());
}
