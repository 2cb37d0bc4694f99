pub mod create_house;
pub mod delete_house;
pub mod find_neighbours;
pub mod list_houses;
pub mod update_house;

pub use create_house::{CreateHouseCommand, CreateHouseUseCase};
pub use delete_house::{DeleteHouseCommand, DeleteHouseUseCase};
pub use find_neighbours::{FindNeighboursCommand, FindNeighboursUseCase, NeighboursResponse};
pub use list_houses::{HouseDto, ListHousesResponse, ListHousesUseCase};
pub use update_house::{UpdateHouseCommand, UpdateHouseUseCase};
