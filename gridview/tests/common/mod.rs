//! Shared fixtures for the table controller tests.

#![allow(dead_code)]

use gridview::{CellValue, Column, TableController, TableRow};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    pub fn new(id: u32, name: &str, category: &str, price: f64, stock: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock,
        }
    }
}

impl TableRow for Product {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn value(&self, column_id: &str) -> CellValue {
        match column_id {
            "id" => CellValue::from(self.id),
            "name" => CellValue::from(self.name.as_str()),
            "category" => CellValue::from(self.category.as_str()),
            "price" => CellValue::from(self.price),
            "stock" => CellValue::from(self.stock),
            _ => CellValue::Null,
        }
    }
}

/// `id` cannot be hidden; everything else is sortable, filterable and hideable.
pub fn columns() -> Vec<Column<Product>> {
    vec![
        Column::new("id", "ID").not_hideable(),
        Column::new("name", "Name"),
        Column::new("category", "Category"),
        Column::new("price", "Price"),
        Column::new("stock", "Stock"),
    ]
}

/// Five hand-picked products for filter and sort tests.
pub fn sample() -> Vec<Product> {
    vec![
        Product::new(1, "Apple Juice", "Drinks", 3.5, 40),
        Product::new(2, "Banana", "Fruit", 0.5, 120),
        Product::new(3, "apple pie", "Bakery", 7.0, 8),
        Product::new(4, "Cherry", "Fruit", 5.0, 0),
        Product::new(5, "Pineapple", "Fruit", 2.5, 15),
    ]
}

/// `n` products with ids `1..=n`, named `Item 01`, `Item 02`, ...
pub fn numbered(n: u32) -> Vec<Product> {
    const CATEGORIES: [&str; 3] = ["Books", "Games", "Tools"];
    (1..=n)
        .map(|i| {
            Product::new(
                i,
                &format!("Item {:02}", i),
                CATEGORIES[(i as usize) % CATEGORIES.len()],
                f64::from(i * 7 % 50),
                i64::from(i % 4),
            )
        })
        .collect()
}

pub fn sample_table() -> TableController<Product> {
    TableController::new(columns(), sample())
}

pub fn numbered_table(n: u32) -> TableController<Product> {
    TableController::new(columns(), numbered(n))
}

/// Ids of the rows on the current page, in display order.
pub fn page_ids(table: &TableController<Product>) -> Vec<u32> {
    table.page_rows().map(|p| p.id).collect()
}

/// Ids of all filtered rows, in display order.
pub fn filtered_ids(table: &TableController<Product>) -> Vec<u32> {
    table.filtered_rows().map(|p| p.id).collect()
}
