use dca_calculator::domain::form::{FormInputs, PurchaseInterval};

#[test]
fn chart_link_carries_the_four_inputs_in_order() {
    let inputs = FormInputs::new("100", "monthly", "2023-01-01", "2024-01-01");
    assert_eq!(
        inputs.chart_link(),
        "/chart?investment_value=100&repeat_purchase=monthly&start_date=2023-01-01&end_date=2024-01-01"
    );
}

#[test]
fn chart_link_interpolates_values_verbatim() {
    // Plain string interpolation - nothing gets escaped beyond what the
    // fields already contain.
    let inputs = FormInputs::new("1 000", "weekly", "2023-01-01", "2023-06-01");
    assert!(inputs.chart_link().starts_with("/chart?investment_value=1 000&"));
}

#[test]
fn amount_check_accepts_any_non_empty_value() {
    assert!(FormInputs::new("100", "daily", "", "").has_valid_amount());
    // The check is presence-only; numeric validation is the backend's job.
    assert!(FormInputs::new("abc", "daily", "", "").has_valid_amount());
    assert!(!FormInputs::new("", "daily", "", "").has_valid_amount());
    assert!(!FormInputs::new("NULL", "daily", "", "").has_valid_amount());
}

#[test]
fn cadence_round_trips_through_its_wire_form() {
    for (wire, interval) in [
        ("daily", PurchaseInterval::Daily),
        ("weekly", PurchaseInterval::Weekly),
        ("every_two_weeks", PurchaseInterval::EveryTwoWeeks),
        ("monthly", PurchaseInterval::Monthly),
    ] {
        assert_eq!(wire.parse::<PurchaseInterval>(), Ok(interval));
        assert_eq!(interval.wire_str(), wire);
    }
    assert!("yearly".parse::<PurchaseInterval>().is_err());
}

#[test]
fn monthly_steps_four_weeks() {
    assert_eq!(PurchaseInterval::Daily.step_days(), 1);
    assert_eq!(PurchaseInterval::Weekly.step_days(), 7);
    assert_eq!(PurchaseInterval::EveryTwoWeeks.step_days(), 14);
    assert_eq!(PurchaseInterval::Monthly.step_days(), 28);
}
