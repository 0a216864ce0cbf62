use yew::prelude::*;

/// Horizontal alignment of a column: text left, numbers right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnAlign {
    Text,
    Numeric,
}

/// A fixed column of a [`DataTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub label: &'static str,
    pub align: ColumnAlign,
}

impl Column {
    pub fn text(label: &'static str) -> Self {
        Self {
            label,
            align: ColumnAlign::Text,
        }
    }

    pub fn numeric(label: &'static str) -> Self {
        Self {
            label,
            align: ColumnAlign::Numeric,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub empty_message: AttrValue,
}

/// Renders pre-built rows under fixed column labels, in the given order.
/// No sorting, filtering, or pagination happens here; an empty row set
/// renders the empty-state sentence and no header row.
#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    if props.rows.is_empty() {
        return html! { <p class="no-data">{props.empty_message.clone()}</p> };
    }

    html! {
        <table class="w-full">
            <thead>
                <tr class="border-b">
                    {for props.columns.iter().map(|col| {
                        let class = match col.align {
                            ColumnAlign::Text => "text-left p-2",
                            ColumnAlign::Numeric => "text-right p-2",
                        };
                        html! { <th class={class}>{col.label}</th> }
                    })}
                </tr>
            </thead>
            <tbody>
                {for props.rows.iter().map(|row| html! {
                    <tr class="border-b">
                        {for row.iter().zip(props.columns.iter()).map(|(cell, col)| {
                            let class = match col.align {
                                ColumnAlign::Text => "p-2",
                                ColumnAlign::Numeric => "text-right p-2",
                            };
                            html! { <td class={class}>{cell.clone()}</td> }
                        })}
                    </tr>
                })}
            </tbody>
        </table>
    }
}
