use crate::shared::icons::icon;
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use leptos::prelude::*;
use thaw::*;

/// Category rows in server order, keyed by id
#[component]
pub fn CategoryTable(
    #[prop(into)] categories: Signal<Vec<Category>>,
    on_edit: Callback<Category>,
    on_delete: Callback<CategoryId>,
) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=true min_width=240.0>"Name"</TableHeaderCell>
                    <TableHeaderCell min_width=180.0>"Actions"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=move || categories.get()
                    // name is part of the key so a rename re-renders the row
                    key=|category| (category.id.clone(), category.name.clone())
                    children=move |category| {
                        let name = category.name.clone();
                        let id_for_delete = category.id.clone();
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>{name}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Space>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Primary
                                                on_click=move |_| on_edit.run(category.clone())
                                            >
                                                {icon("edit")}
                                                " Edit"
                                            </Button>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Secondary
                                                on_click=move |_| on_delete.run(id_for_delete.clone())
                                            >
                                                {icon("delete")}
                                                " Delete"
                                            </Button>
                                        </Space>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
    }
}
