mod item;

pub use item::ItemPayload;
