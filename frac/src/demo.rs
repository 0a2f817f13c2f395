//! A fixed walk through every fraction operator.

use libfrac::{BinaryOperator, Emit, EmitFormat, Fraction, Scalar, Value};

/// Runs the demo, returning its output emitted in `form`.
///
/// The operands are `1/2`, `1/4`, `2/4`, and the scalars `2` and `1.5`. Each result is printed
/// as a line of the form `<lhs> <op> <rhs> = <result>`.
pub fn run_demo(form: EmitFormat) -> String {
    tracing::debug!(?form, "running demo");

    let f1 = Fraction::new(1, 2);
    let f2 = Fraction::new(1, 4);
    let f3 = Fraction::new(2, 4);
    let int = Scalar::Int(2);
    let float = Scalar::Float(1.5);

    let mut demo = Demo::new(form);

    demo.section("Construction");
    for frac in [f1, f2, f3].iter() {
        demo.value(frac);
    }

    demo.section("Negation");
    demo.negation(f1, -f1);
    demo.negation(f2, -f2);

    demo.section("Addition");
    demo.binary(&f1, BinaryOperator::Plus, &f2, Value::Fraction(f1 + f2));

    demo.section("Subtraction");
    demo.binary(&f1, BinaryOperator::Minus, &f2, Value::Fraction(f1 - f2));

    demo.section("Multiplication by a fraction");
    demo.binary(&f1, BinaryOperator::Mult, &f2, Value::Fraction(f1 * f2));

    demo.section("Multiplication by an integer");
    demo.binary(&f1, BinaryOperator::Mult, &int, Value::Fraction(f1 * int));

    demo.section("Multiplication by a float");
    demo.binary(&f1, BinaryOperator::Mult, &float, Value::Fraction(f1 * float));

    demo.section("Integer times a fraction");
    demo.binary(&int, BinaryOperator::Mult, &f1, Value::Fraction(int * f1));

    demo.section("Float times a fraction");
    demo.binary(&float, BinaryOperator::Mult, &f1, Value::Fraction(float * f1));

    let comparisons: [(&str, BinaryOperator, fn(&Fraction, &Fraction) -> bool); 6] = [
        ("Equality", BinaryOperator::Equal, |a, b| a == b),
        ("Inequality", BinaryOperator::NotEqual, |a, b| a != b),
        ("Greater than", BinaryOperator::Greater, |a, b| a > b),
        ("Less than", BinaryOperator::Less, |a, b| a < b),
        ("Greater or equal", BinaryOperator::GreaterEqual, |a, b| a >= b),
        ("Less or equal", BinaryOperator::LessEqual, |a, b| a <= b),
    ];
    for (title, op, compare) in comparisons.iter() {
        demo.section(title);
        let mut pairs = vec![(f1, f3), (f2, f3)];
        // == and != only compare against 2/4.
        if !matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual) {
            pairs.push((f1, f2));
        }
        for (lhs, rhs) in pairs {
            demo.binary(&lhs, *op, &rhs, Value::Bool(compare(&lhs, &rhs)));
        }
    }

    demo.finish()
}

struct Demo {
    form: EmitFormat,
    lines: Vec<String>,
}

impl Demo {
    fn new(form: EmitFormat) -> Self {
        Self {
            form,
            lines: Vec::with_capacity(48),
        }
    }

    fn section(&mut self, title: &str) {
        self.lines.push(format!("=== {} ===", title));
    }

    fn value(&mut self, value: &dyn Emit) {
        self.lines.push(value.emit(self.form));
    }

    fn negation(&mut self, operand: Fraction, result: Fraction) {
        let negated = match self.form {
            EmitFormat::SExpression => format!("(- {})", operand.emit(self.form)),
            EmitFormat::Latex => format!("-{}", operand.emit(self.form)),
            _ => format!("-({})", operand.emit(self.form)),
        };
        self.lines
            .push(format!("{} = {}", negated, result.emit(self.form)));
    }

    fn binary(&mut self, lhs: &dyn Emit, op: BinaryOperator, rhs: &dyn Emit, result: Value) {
        let form = self.form;
        let operation = match form {
            EmitFormat::SExpression => format!(
                "({} {} {})",
                op.emit_pretty(),
                lhs.emit(form),
                rhs.emit(form)
            ),
            _ => format!("{} {} {}", lhs.emit(form), op.emit(form), rhs.emit(form)),
        };
        self.lines
            .push(format!("{} = {}", operation, result.emit(form)));
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}
