//! The inventory table: an immutable set of products loaded once.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use restock_core::{DomainError, DomainResult, ProductId};

use crate::product::{Product, REQUIRED_COLUMNS};
use crate::reorder::{ProductMetrics, ReorderPolicy};

/// Product records keyed by id.
///
/// Row order is the load order. Callers share it behind an `Arc` and derive
/// per-request views from it; mutation is only possible on a [`copy`](Self::copy).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryTable {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl InventoryTable {
    /// Parse CSV with a header row naming the product fields.
    ///
    /// All-or-nothing: any unreadable row, missing column, unparseable number,
    /// invalid value or duplicate id fails the whole load.
    pub fn load<R: Read>(reader: R) -> DomainResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        // Checked up front so a header-only or empty file cannot load as an empty table.
        let headers = rdr
            .headers()
            .map_err(|e| DomainError::load(format!("header: {e}")))?;
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::load(format!(
                "missing column(s): {}",
                missing.join(", ")
            )));
        }

        let mut products = Vec::new();
        for (row, result) in rdr.deserialize::<Product>().enumerate() {
            let product =
                result.map_err(|e| DomainError::load(format!("row {}: {e}", row + 1)))?;
            products.push(product);
        }

        Self::from_products(products)
    }

    /// Load the CSV file at `path`.
    pub fn load_path(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| DomainError::load(format!("{}: {e}", path.display())))?;
        let table = Self::load(file)?;
        tracing::info!(path = %path.display(), rows = table.len(), "inventory table loaded");
        Ok(table)
    }

    /// Build a table from already-parsed records, applying the same checks as [`load`](Self::load).
    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            product
                .validate()
                .map_err(|e| DomainError::load(format!("row {} (id {}): {e}", pos + 1, product.id)))?;
            if index.insert(product.id, pos).is_some() {
                return Err(DomainError::load(format!(
                    "row {}: duplicate product id {}",
                    pos + 1,
                    product.id
                )));
            }
        }
        Ok(Self { products, index })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Every product with freshly derived metrics. The table is untouched.
    pub fn all(&self, policy: &ReorderPolicy) -> Vec<ProductMetrics> {
        self.products.iter().map(|p| policy.derive(p)).collect()
    }

    /// An independent copy for what-if scenarios.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn find_by_id(&self, id: ProductId) -> DomainResult<&Product> {
        self.index
            .get(&id)
            .map(|&pos| &self.products[pos])
            .ok_or_else(|| DomainError::not_found(format!("product {id} not found")))
    }

    /// Derived metrics for a single product.
    pub fn metrics_for(&self, id: ProductId, policy: &ReorderPolicy) -> DomainResult<ProductMetrics> {
        self.find_by_id(id).map(|p| policy.derive(p))
    }

    pub(crate) fn find_by_id_mut(&mut self, id: ProductId) -> DomainResult<&mut Product> {
        match self.index.get(&id) {
            Some(&pos) => Ok(&mut self.products[pos]),
            None => Err(DomainError::not_found(format!("product {id} not found"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::widget;

    const SAMPLE: &str = "\
id,name,current_stock,average_daily_sales,min_reorder_qty,lead_time,cost_per_unit,criticality
1,Widget,100,10,50,3,2.5,high
2,Gadget,40,8,20,4,12,medium
3,Doohickey,500,0,25,10,1.25,low
";

    fn sample() -> InventoryTable {
        InventoryTable::load(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn load_parses_all_rows_in_order() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert_eq!(table.products()[0], widget());
        assert_eq!(table.products()[2].name, "Doohickey");
    }

    #[test]
    fn load_ignores_column_order_and_extra_columns() {
        let csv = "\
criticality,name,id,lead_time,current_stock,average_daily_sales,min_reorder_qty,cost_per_unit,supplier
high,Widget,1,3,100,10,50,2.5,ACME
";
        let table = InventoryTable::load(csv.as_bytes()).unwrap();
        assert_eq!(table.products(), &[widget()]);
    }

    #[test]
    fn load_fails_on_missing_column() {
        let csv = "id,name,current_stock\n1,Widget,100\n";
        let err = InventoryTable::load(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DomainError::Load(_)));
    }

    #[test]
    fn load_fails_on_header_only_missing_columns() {
        let err = InventoryTable::load("id,name\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DomainError::Load(msg) if msg.contains("current_stock")));
    }

    #[test]
    fn load_fails_on_empty_input() {
        let err = InventoryTable::load("".as_bytes()).unwrap_err();
        assert!(matches!(err, DomainError::Load(msg) if msg.contains("missing column")));
    }

    #[test]
    fn load_fails_on_unparseable_number() {
        let csv = SAMPLE.replace("40,8,20", "forty,8,20");
        let err = InventoryTable::load(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DomainError::Load(msg) if msg.contains("row 2")));
    }

    #[test]
    fn load_fails_on_duplicate_id() {
        let csv = format!("{SAMPLE}1,Again,1,1,1,1,1,low\n");
        let err = InventoryTable::load(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DomainError::Load(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn load_fails_on_negative_sales() {
        let csv = SAMPLE.replace("40,8,20", "40,-8,20");
        assert!(InventoryTable::load(csv.as_bytes()).is_err());
    }

    #[test]
    fn load_path_reports_missing_file() {
        let err = InventoryTable::load_path("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, DomainError::Load(_)));
    }

    #[test]
    fn empty_table_is_valid() {
        let csv = SAMPLE.lines().next().unwrap();
        let table = InventoryTable::load(csv.as_bytes()).unwrap();
        assert!(table.is_empty());
        assert!(table.all(&ReorderPolicy::default()).is_empty());
    }

    #[test]
    fn all_derives_without_touching_the_table() {
        let table = sample();
        let before = table.clone();

        let metrics = table.all(&ReorderPolicy::default());
        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics[0].reorder_qty, 500);
        assert!(metrics[1].needs_reorder);
        assert!(metrics[2].days_remaining.is_infinite());

        assert_eq!(table, before);
    }

    #[test]
    fn find_by_id_returns_not_found_for_absent_ids() {
        let table = sample();
        assert_eq!(table.find_by_id(ProductId::new(2)).unwrap().name, "Gadget");

        let err = table.find_by_id(ProductId::new(9999)).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn copy_is_independent() {
        let table = sample();
        let mut copy = table.copy();
        copy.find_by_id_mut(ProductId::new(1)).unwrap().average_daily_sales = 99.0;

        assert_eq!(table.find_by_id(ProductId::new(1)).unwrap().average_daily_sales, 10.0);
    }
}
