use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::models::{Category, CategoryId, CategoryStat, Expense, ExpenseId, Period};

/// Inclusive date bounds for a period, `None` meaning unbounded
fn bounds(period: Period, today: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
    match period.date_range(today) {
        Some((start, end)) => (Some(start), Some(end)),
        None => (None, None),
    }
}

/// Insert an expense and return its row id
pub fn insert_expense(
    conn: &Connection,
    category_id: CategoryId,
    amount: f64,
    description: &str,
    date: NaiveDate,
) -> rusqlite::Result<ExpenseId> {
    conn.execute(
        "INSERT INTO expenses (category_id, amount, description, date)
         VALUES (?1, ?2, ?3, ?4)",
        params![category_id, amount, description, date],
    )?;
    Ok(ExpenseId::new(conn.last_insert_rowid()))
}

/// Get expenses within a period, newest first
pub fn get_expenses(
    conn: &Connection,
    period: Period,
    today: NaiveDate,
) -> rusqlite::Result<Vec<Expense>> {
    let (start, end) = bounds(period, today);
    let mut stmt = conn.prepare(
        "SELECT id, category_id, amount, description, date
         FROM expenses
         WHERE (?1 IS NULL OR date >= ?1) AND (?2 IS NULL OR date <= ?2)
         ORDER BY date DESC, id DESC",
    )?;

    let expenses = stmt.query_map(params![start, end], |row| {
        Ok(Expense {
            id: row.get(0)?,
            category_id: row.get(1)?,
            amount: row.get(2)?,
            description: row.get(3)?,
            date: row.get(4)?,
        })
    })?;

    expenses.collect()
}

/// Get all categories ordered by id
pub fn get_categories(conn: &Connection) -> rusqlite::Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY id")?;

    let categories = stmt.query_map([], |row| {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    categories.collect()
}

/// Delete an expense by ID
pub fn delete_expense(conn: &Connection, id: ExpenseId) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM expenses WHERE id = ?1", params![id])
}

/// Get count and total per category within a period
pub fn get_category_stats(
    conn: &Connection,
    period: Period,
    today: NaiveDate,
) -> rusqlite::Result<Vec<CategoryStat>> {
    let (start, end) = bounds(period, today);
    let mut stmt = conn.prepare(
        "SELECT c.id, c.name, COUNT(e.id) AS transaction_count,
                COALESCE(SUM(e.amount), 0) AS total_amount
         FROM categories c
         JOIN expenses e ON e.category_id = c.id
         WHERE (?1 IS NULL OR e.date >= ?1) AND (?2 IS NULL OR e.date <= ?2)
         GROUP BY c.id, c.name
         HAVING total_amount != 0
         ORDER BY total_amount DESC, c.id ASC",
    )?;

    let stats = stmt.query_map(params![start, end], |row| {
        let count: i64 = row.get(2)?;
        Ok(CategoryStat {
            category_id: row.get(0)?,
            category_name: row.get(1)?,
            transaction_count: count.max(0) as u64,
            total_amount: row.get(3)?,
        })
    })?;

    stats.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sqlite::schema::init_schema;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let conn = setup();
        let a = insert_expense(&conn, CategoryId::new(1), 1.0, "a", date(2025, 1, 1)).unwrap();
        let b = insert_expense(&conn, CategoryId::new(1), 1.0, "b", date(2025, 1, 1)).unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_dates_stored_as_iso_text() {
        let conn = setup();
        insert_expense(&conn, CategoryId::new(1), 1.0, "a", date(2025, 1, 9)).unwrap();

        let raw: String = conn
            .query_row("SELECT date FROM expenses", [], |row| row.get(0))
            .unwrap();
        assert_eq!(raw, "2025-01-09");
    }

    #[test]
    fn test_stats_total_as_float_for_integer_sums() {
        let conn = setup();
        insert_expense(&conn, CategoryId::new(2), 50.0, "Metro", date(2025, 1, 1)).unwrap();

        let stats = get_category_stats(&conn, Period::All, date(2025, 1, 1)).unwrap();
        assert_eq!(stats[0].total_amount, 50.0);
        assert_eq!(stats[0].transaction_count, 1);
    }

    #[test]
    fn test_delete_reports_rows() {
        let conn = setup();
        let id = insert_expense(&conn, CategoryId::new(1), 1.0, "a", date(2025, 1, 1)).unwrap();
        assert_eq!(delete_expense(&conn, id).unwrap(), 1);
        assert_eq!(delete_expense(&conn, id).unwrap(), 0);
    }
}
