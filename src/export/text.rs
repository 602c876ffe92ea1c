use crate::schedule::AmortizationPlan;

pub const ATTACHMENT_FILENAME: &str = "amortization_plan.txt";

/// render the plan as a fixed-width table with a totals trailer
pub fn render_table(plan: &AmortizationPlan) -> String {
    let header = format!(
        "{:>4} {:>10} {:>10} {:>10} {:>10}",
        "N°", "Rata", "Cap", "Int", "Res"
    );
    let rule = "-".repeat(header.chars().count());

    let mut lines = Vec::with_capacity(plan.rows.len() + 4);
    lines.push(header);
    lines.push(rule.clone());

    for row in &plan.rows {
        lines.push(format!(
            "{:>4} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            row.period,
            row.payment.as_decimal(),
            row.principal_portion.as_decimal(),
            row.interest_portion.as_decimal(),
            row.remaining_balance.as_decimal(),
        ));
    }

    lines.push(rule);
    lines.push(format!(
        "{:>4} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
        "Tot",
        plan.totals.total_payment.as_decimal(),
        plan.totals.total_principal.as_decimal(),
        plan.totals.total_interest.as_decimal(),
        plan.totals.final_balance.as_decimal(),
    ));

    lines.join("\n")
}
