use dream_calc::{
    core::services::{calc_months_to_goal, calc_totals, SummaryService},
    format::{format_months, format_months_in, format_money, pluralize, Language},
    ledger::{normalize_raw, normalize_to_month, BudgetState, Category, Goal, Period},
};

#[test]
fn normalization_uses_fixed_month() {
    assert_eq!(normalize_to_month(100.0, &Period::Day), 3000.0);
    assert_eq!(normalize_to_month(100.0, &Period::Week), 400.0);
    assert_eq!(normalize_to_month(100.0, &Period::Month), 100.0);
    assert_eq!(normalize_raw(100.0, "year"), 0.0);
}

#[test]
fn totals_allow_negative_savings() {
    let categories = vec![
        Category::new("Rent", 40000.0, Period::Month),
        Category::new("Food", 500.0, Period::Day),
    ];
    let totals = calc_totals(&categories, 50000.0);
    assert_eq!(totals.total_expenses, 55000.0);
    assert_eq!(totals.savings, -5000.0);
}

#[test]
fn totals_do_not_depend_on_order() {
    let mut categories = vec![
        Category::new("Coffee", 150.0, Period::Day),
        Category::new("Gym", 700.0, Period::Week),
        Category::new("Rent", 20000.0, Period::Month),
    ];
    let forward = calc_totals(&categories, 60000.0);
    categories.reverse();
    assert_eq!(calc_totals(&categories, 60000.0), forward);
}

#[test]
fn months_to_goal_rounds_up_and_is_monotonic() {
    assert_eq!(calc_months_to_goal(30000.0, 100000.0), Some(4));
    assert_eq!(calc_months_to_goal(0.0, 100000.0), None);
    assert_eq!(calc_months_to_goal(1000.0, 0.0), None);

    let mut previous = 0;
    for savings in (1..=50).rev().map(|step| step as f64 * 1000.0) {
        let months = calc_months_to_goal(savings, 120000.0).unwrap();
        assert!(months >= previous);
        previous = months;
    }
}

#[test]
fn durations_read_naturally() {
    assert_eq!(format_months(0), "less than a month");
    assert_eq!(format_months(11), "11 months");
    assert_eq!(format_months(13), "1 year and 1 month");
    assert_eq!(format_months_in(22, Language::Ru), "1 год и 10 месяцев");
}

#[test]
fn pluralize_exception_band() {
    let pick = |n| pluralize(n, "one", "few", "many");
    assert_eq!(pick(1), "one");
    assert_eq!(pick(3), "few");
    assert_eq!(pick(12), "many");
    assert_eq!(pick(21), "one");
    assert_eq!(pick(104), "few");
    assert_eq!(pick(111), "many");
}

#[test]
fn projection_end_to_end() {
    let state = BudgetState {
        income: 80000.0,
        categories: vec![
            Category::new("Rent", 30000.0, Period::Month),
            Category::new("Lunch", 2500.0, Period::Week),
        ],
        goal: Goal::new("Bike", 95000.0),
    };
    let projection = SummaryService::project(&state);
    assert_eq!(projection.totals.savings, 40000.0);
    assert_eq!(projection.months_to_goal, Some(3));
    assert_eq!(projection.duration.as_deref(), Some("3 months"));
    assert_eq!(format_money(projection.totals.savings, "₽"), "40 000 ₽");
}
