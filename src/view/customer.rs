use dioxus::prelude::*;

use crate::{
    model::{
        customer::{CustomerDto, CustomerListItemDto},
        reservation::ReservationDto,
    },
    view::layout::Layout,
};

/// List of customers under a heading, used by the home, search and ranking pages.
#[component]
pub fn CustomerListPage(header: String, customers: Vec<CustomerListItemDto>) -> Element {
    rsx!(
        Layout {
            page_title: header.clone(),
            h1 { class: "text-2xl font-bold mb-4", "{header}" }
            if customers.is_empty() {
                p { class: "opacity-50", "No customers found." }
            } else {
                ul {
                    class: "menu bg-base-200 rounded-box w-full",
                    for customer in customers.iter() {
                        li {
                            key: "{customer.id}",
                            a {
                                class: "flex justify-between",
                                href: "/{customer.id}/",
                                span {
                                    "{customer.full_name}"
                                    if !customer.phone.is_empty() {
                                        span { class: "opacity-60 ml-2", "{customer.phone}" }
                                    }
                                }
                                if let Some(count) = customer.reservation_count {
                                    span { class: "badge badge-neutral", "{count} reservations" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

/// Customer details, their reservations and the add-reservation form.
#[component]
pub fn CustomerDetailPage(customer: CustomerDto, reservations: Vec<ReservationDto>) -> Element {
    rsx!(
        Layout {
            page_title: customer.full_name.clone(),
            div {
                class: "flex justify-between items-center mb-4",
                h1 { class: "text-2xl font-bold", "{customer.full_name}" }
                a {
                    class: "btn btn-sm btn-outline",
                    href: "/{customer.id}/edit/",
                    "Edit"
                }
            }
            p { b { "Phone: " } "{customer.phone}" }
            p { b { "Notes: " } "{customer.notes}" }

            h2 { class: "text-xl font-bold mt-6 mb-2", "Reservations" }
            if reservations.is_empty() {
                p { class: "opacity-50", "No reservations yet." }
            } else {
                ul {
                    class: "list-disc pl-6",
                    for reservation in reservations.iter() {
                        li {
                            key: "{reservation.id}",
                            b { "{reservation.start_at}" }
                            " for {reservation.num_guests} guests"
                            if !reservation.notes.is_empty() {
                                p { class: "opacity-70", "{reservation.notes}" }
                            }
                        }
                    }
                }
            }

            h2 { class: "text-xl font-bold mt-6 mb-2", "New Reservation" }
            form {
                class: "flex flex-col gap-2",
                action: "/{customer.id}/add-reservation/",
                method: "post",
                label { r#for: "startAt", "Start" }
                input {
                    class: "input input-bordered",
                    id: "startAt",
                    r#type: "datetime-local",
                    name: "startAt",
                    required: true,
                }
                label { r#for: "numGuests", "Number of guests" }
                input {
                    class: "input input-bordered",
                    id: "numGuests",
                    r#type: "number",
                    name: "numGuests",
                    min: "1",
                    value: "2",
                    required: true,
                }
                label { r#for: "reservationNotes", "Notes" }
                textarea {
                    class: "textarea textarea-bordered",
                    id: "reservationNotes",
                    name: "notes",
                }
                button { class: "btn btn-primary", r#type: "submit", "Add Reservation" }
            }
        }
    )
}

/// Empty form for adding a customer.
#[component]
pub fn NewCustomerPage() -> Element {
    rsx!(
        Layout {
            page_title: "Add Customer".to_string(),
            h1 { class: "text-2xl font-bold mb-4", "Add Customer" }
            form {
                class: "flex flex-col gap-2",
                action: "/add/",
                method: "post",
                CustomerFormFields {
                    first_name: String::new(),
                    last_name: String::new(),
                    phone: String::new(),
                    notes: String::new(),
                }
                button { class: "btn btn-primary", r#type: "submit", "Add" }
            }
        }
    )
}

/// Form for editing a customer, pre-filled with the current values.
#[component]
pub fn EditCustomerPage(customer: CustomerDto) -> Element {
    rsx!(
        Layout {
            page_title: format!("Edit {}", customer.full_name),
            h1 { class: "text-2xl font-bold mb-4", "Edit {customer.full_name}" }
            form {
                class: "flex flex-col gap-2",
                action: "/{customer.id}/edit/",
                method: "post",
                CustomerFormFields {
                    first_name: customer.first_name.clone(),
                    last_name: customer.last_name.clone(),
                    phone: customer.phone.clone(),
                    notes: customer.notes.clone(),
                }
                button { class: "btn btn-primary", r#type: "submit", "Save" }
            }
        }
    )
}

#[component]
fn CustomerFormFields(first_name: String, last_name: String, phone: String, notes: String) -> Element {
    rsx!(
        label { r#for: "firstName", "First name" }
        input {
            class: "input input-bordered",
            id: "firstName",
            r#type: "text",
            name: "firstName",
            value: "{first_name}",
            required: true,
        }
        label { r#for: "lastName", "Last name" }
        input {
            class: "input input-bordered",
            id: "lastName",
            r#type: "text",
            name: "lastName",
            value: "{last_name}",
            required: true,
        }
        label { r#for: "phone", "Phone" }
        input {
            class: "input input-bordered",
            id: "phone",
            r#type: "tel",
            name: "phone",
            value: "{phone}",
        }
        label { r#for: "notes", "Notes" }
        textarea {
            class: "textarea textarea-bordered",
            id: "notes",
            name: "notes",
            "{notes}"
        }
    )
}
