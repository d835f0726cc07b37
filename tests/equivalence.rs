//! Fuzzed agreement between the tree-walking evaluator and the bytecode VM.
//!
//! For any well-formed expression the two backends must agree bit-for-bit
//! on success, and must both fail when either fails.

use formulon_rs::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VARS: [&str; 3] = ["x", "y", "z"];
const BINARY_OPS: [&str; 12] = [
    "+", "-", "*", "/", "%", "^", "<", "<=", ">", "==", "&&", "||",
];
const UNARY_FUNCS: [&str; 7] = ["abs", "floor", "ceil", "round", "sin", "cos", "sqrt"];

fn gen_atom(rng: &mut StdRng) -> String {
    match rng.random_range(0..4u32) {
        0 => VARS[rng.random_range(0..VARS.len())].to_string(),
        1 => rng.random_range(0..10u32).to_string(),
        2 => format!("{:.2}", rng.random::<f64>() * 10.0),
        _ => format!("-{}", rng.random_range(1..5u32)),
    }
}

fn gen_expr(rng: &mut StdRng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }
    match rng.random_range(0..10u32) {
        0..=4 => {
            let op = BINARY_OPS[rng.random_range(0..BINARY_OPS.len())];
            format!(
                "({} {} {})",
                gen_expr(rng, depth - 1),
                op,
                gen_expr(rng, depth - 1)
            )
        }
        5 => format!("(-{})", gen_expr(rng, depth - 1)),
        6 => format!("(!{})", gen_expr(rng, depth - 1)),
        7 => {
            let func = UNARY_FUNCS[rng.random_range(0..UNARY_FUNCS.len())];
            format!("{}({})", func, gen_expr(rng, depth - 1))
        }
        8 => format!(
            "min({}, {})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        _ => format!(
            "({} ? {} : {})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
    }
}

#[test]
fn test_interpreter_and_vm_agree_on_random_expressions() {
    let mut rng = StdRng::seed_from_u64(0x5EED_F0F0);
    let mut context = Context::new();
    context.set_var("x", 3.5).unwrap();
    context.set_var("y", -2.0).unwrap();
    context.set_var("z", 0.0).unwrap();

    for round in 0..500 {
        let depth = rng.random_range(1..=3usize);
        let expression = gen_expr(&mut rng, depth);

        let interpreted = context.eval(&expression);
        let formula = context.compile(&expression);
        let executed = formula.and_then(|formula| context.exec(&formula));

        match (&interpreted, &executed) {
            (Ok(a), Ok(b)) => assert_eq!(
                a.to_bits(),
                b.to_bits(),
                "round {round}: backends disagree on `{expression}`: {a} vs {b}"
            ),
            (Err(_), Err(_)) => {}
            _ => panic!(
                "round {round}: one backend failed on `{expression}`: \
                 interpreter {interpreted:?}, vm {executed:?}"
            ),
        }
    }
}

#[test]
fn test_backends_agree_on_known_tricky_cases() {
    let mut context = Context::new();
    context.set_var("x", 2.0).unwrap();

    for expression in [
        "2^3^2",
        "-2^2",
        "1-2-3",
        "12/3/2",
        "0 ? 1/0 : 2",
        "1 || 1/0",
        "x % 0.7",
        "min(max(1, 2), 3) * sign(-5)",
        "smoothstep(0, 10, x) + step(2, x)",
        "atan2(x, 3) - pow(x, 0.5)",
    ] {
        let interpreted = context.eval(expression);
        let formula = context.compile(expression);
        let executed = formula.and_then(|formula| context.exec(&formula));
        match (&interpreted, &executed) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.to_bits(), b.to_bits(), "backends disagree on `{expression}`")
            }
            (Err(_), Err(_)) => {}
            _ => panic!("one backend failed on `{expression}`"),
        }
    }
}
