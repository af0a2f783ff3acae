mod customer;
mod reservation;
