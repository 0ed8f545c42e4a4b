mod common;

use common::{options, product_page, profile, url};
use nutriscrape::{build_record, Field, Options, SiteProfile};

const FULL_ROWS: &[(&str, &str)] = &[
    ("Valor Energético (kcal)", "236 kcal = 987 kJ"),
    ("Carboidratos (g)", "19,5 g"),
    ("Proteínas (g)", "11 g"),
    ("Gorduras Totais (g)", "12,4 g"),
    ("Gorduras Saturadas (g)", "3,1 g"),
    ("Fibra Alimentar (g)", "1,2 g"),
    ("Açúcares Totais (g)", "0,5 g"),
    ("Sódio (mg)", "485 mg"),
];

#[test]
fn full_product_page() {
    let page_url = url("produtos/empanados/todos-os-empanados/mini-chicken-tradicional/");
    let html = product_page("Mini Chicken Tradicional", "Porção 130g (5 unidades)", FULL_ROWS);

    let record = build_record(&page_url, &html, &profile(), &options());

    assert_eq!(record.name(), "Mini Chicken Tradicional");
    assert_eq!(record.url(), page_url);
    assert_eq!(record.category(), Some("Empanados"));
    assert_eq!(record.portion(), "130");

    let expected = [
        (Field::Calorias, "236"),
        (Field::Carboidratos, "19.5"),
        (Field::Proteinas, "11"),
        (Field::GordurasTotais, "12.4"),
        (Field::GordurasSaturadas, "3.1"),
        (Field::Fibras, "1.2"),
        (Field::Acucares, "0.5"),
        (Field::Sodio, "485"),
    ];
    for (field, value) in expected {
        assert_eq!(record.get(field), Some(value), "{field}");
    }
}

#[test]
fn omitted_fiber_row_reads_as_zero() {
    let rows: Vec<_> = FULL_ROWS
        .iter()
        .copied()
        .filter(|(label, _)| !label.starts_with("Fibra"))
        .collect();
    let html = product_page("Salsicha", "Porção 50g", &rows);

    let record = build_record(&url("produtos/salsichas/x/"), &html, &profile(), &options());

    assert_eq!(record.get(Field::Fibras), Some("0"));
    assert_eq!(record.get(Field::Sodio), Some("485"));
}

#[test]
fn missing_rows_default_to_zero() {
    let html = product_page("Bacon", "Porção 10g", &[("Valor Energético", "45 kcal")]);

    let record = build_record(&url("produtos/bacon/x/"), &html, &profile(), &options());

    assert_eq!(record.get(Field::Calorias), Some("45"));
    assert_eq!(record.get(Field::Proteinas), Some("0"));
    assert_eq!(record.get(Field::Acucares), Some("0"));
    assert_eq!(record.portion(), "10");
}

#[test]
fn page_without_table_is_still_a_complete_record() {
    let html = "<html><body><h1>Lasanha Bolonhesa</h1><p>Em breve</p></body></html>";

    let record = build_record(&url("produtos/pratos-prontos/lasanhas/x/"), html, &profile(), &options());

    assert_eq!(record.name(), "Lasanha Bolonhesa");
    assert_eq!(record.category(), Some("Pratos-Prontos"));
    assert_eq!(record.portion(), "100");
    for field in Field::NUTRIENTS {
        assert_eq!(record.get(field), Some("0"), "{field}");
    }
}

#[test]
fn portion_cell_without_grams_uses_default() {
    let html = product_page("Peru", "Porção 1 fatia", &[("Sódio (mg)", "300 mg")]);

    let record = build_record(&url("produtos/peru/x/"), &html, &profile(), &options());

    assert_eq!(record.portion(), "100");
}

#[test]
fn url_outside_products_gets_category_sentinel() {
    let html = product_page("Receita", "Porção 100g", &[]);

    let record = build_record(&url("receitas/x/"), &html, &profile(), &options());

    assert_eq!(record.category(), Some("Categoria não identificada"));
}

#[test]
fn category_can_be_disabled() {
    let html = product_page("Presunto", "Porção 40g", &[]);
    let options = Options {
        include_category: false,
        ..options()
    };

    let record = build_record(&url("produtos/frios/x/"), &html, &profile(), &options);

    assert_eq!(record.category(), None);
    assert_eq!(record.get(Field::Categoria), None);
}

#[test]
fn energy_label_variants_are_recognized() {
    for label in ["Valor energético", "VALOR ENERGÉTICO (kcal/kJ)", "  Valor   Energético  (kcal) "] {
        let html = product_page("X", "Porção 20g", &[(label, "99 kcal")]);
        let record = build_record(&url("produtos/frios/x/"), &html, &profile(), &options());
        assert_eq!(record.get(Field::Calorias), Some("99"), "{label}");
    }
}

#[test]
fn localized_profile_drives_extraction() {
    let profile = SiteProfile::from_json(
        r#"{
            "name": "example-foods",
            "base_url": "https://foods.example.com/",
            "products_segment": "products",
            "dataset_prefix": "example_products",
            "sections": [{ "name": "SNACKS", "url": "https://foods.example.com/products/snacks/" }],
            "markup": {
                "product_title_class": "title",
                "table_class": "facts",
                "title_cell_class": "facts-title",
                "row_cell_class": "facts-row"
            },
            "portion_label": "Portion",
            "energy_label": "Energy Value",
            "nutrient_labels": { "Protein (g)": "PROTEINAS", "Sodium (mg)": "SODIO" },
            "name_sentinel": "Name not found",
            "category_sentinel": "Unknown category"
        }"#,
    )
    .unwrap();

    let html = r#"
        <h1 class="title">Trail Mix</h1>
        <table class="facts">
          <tr><td class="facts-title">Portion 30g</td></tr>
          <tr><td class="facts-row">Energy value (kcal)</td><td class="facts-row">150 kcal</td></tr>
          <tr><td class="facts-row">Protein (g)</td><td class="facts-row">4.5 g</td></tr>
          <tr><td class="facts-row">Sodium (mg)</td><td class="facts-row">80 mg</td></tr>
        </table>
    "#;

    let record = build_record(
        "https://foods.example.com/products/snacks/trail-mix/",
        html,
        &profile,
        &Options::default(),
    );

    assert_eq!(record.name(), "Trail Mix");
    assert_eq!(record.category(), Some("Snacks"));
    assert_eq!(record.portion(), "30");
    assert_eq!(record.get(Field::Calorias), Some("150"));
    assert_eq!(record.get(Field::Proteinas), Some("4.5"));
    assert_eq!(record.get(Field::Sodio), Some("80"));
    assert_eq!(record.get(Field::Fibras), Some("0"));
}
