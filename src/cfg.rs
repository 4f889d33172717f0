// Macro borrowed from https://github.com/hyperium/hyper
// hyper is provided under the MIT license. See LICENSE.

/// Gates each item on the meta, and marks it in the docs.
macro_rules! cfg_feature {
    (
        #![$meta:meta]
        $($item:item)*
    ) => {
        $(
            #[cfg($meta)]
            #[cfg_attr(docsrs, doc(cfg($meta)))]
            $item
        )*
    }
}
